use crate::utils::Result;
use std::{
    fs::File,
    io::BufWriter,
    path::PathBuf,
};

pub fn output_path(output_prefix: &str, output_suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", output_prefix, output_suffix))
}

pub fn create_writer(output_prefix: &str, output_suffix: &str) -> Result<BufWriter<File>> {
    let path = output_path(output_prefix, output_suffix);
    log::debug!("Writing {}", path.display());
    let file = File::create(&path)
        .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
    Ok(BufWriter::new(file))
}
