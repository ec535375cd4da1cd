use super::Result;
use crate::indel::Alignment;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read as ioRead};
use std::path::Path;

pub fn open_fasta_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    fn is_gzipped(path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.ends_with(".gz") || path_str.ends_with(".gzip")
    }
    let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(format!("Invalid gzip header: {}", path.to_string_lossy()))
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

pub fn open_alignment(path: &Path) -> Result<Alignment> {
    let reader = open_fasta_reader(path)?;
    let alignment =
        Alignment::from_reader(reader).map_err(|e| format!("{}: {}", path.display(), e))?;
    log::debug!(
        "Loaded {} sequences of aligned length {} from {}",
        alignment.len(),
        alignment.width(),
        path.display()
    );
    Ok(alignment)
}

/// Reads sequence names, one per line. Blank lines are ignored.
pub fn read_order<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line =
            line.map_err(|e| format!("Error reading line {}: {}", line_number + 1, e))?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

pub fn open_order(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    read_order(BufReader::new(file))
}
