use crate::utils::{IndelError, IndelResult};
use std::{io::Read, str::FromStr};

const CATALOG_COLUMNS: usize = 7;

/// Longest length a histogram reports.
pub const MAX_HISTOGRAM_LEN: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthColumn {
    Full,
    Amino,
}

impl LengthColumn {
    fn index(self) -> usize {
        match self {
            LengthColumn::Full => 5,
            LengthColumn::Amino => 6,
        }
    }
}

impl FromStr for LengthColumn {
    type Err = &'static str;
    fn from_str(column: &str) -> Result<Self, Self::Err> {
        match column {
            "full" => Ok(LengthColumn::Full),
            "amino" => Ok(LengthColumn::Amino),
            _ => Err("Invalid length column. Options are: full, amino"),
        }
    }
}

/// Reads one length column from the indel table of a cohort catalogue,
/// stopping at the insertion table that follows it.
pub fn read_catalog_lengths<R: Read>(
    reader: R,
    column: LengthColumn,
) -> IndelResult<Vec<usize>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut lengths = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        if record.len() != CATALOG_COLUMNS {
            break;
        }
        let field = &record[column.index()];
        let length = field.parse().map_err(|_| {
            IndelError::InputFormat(format!(
                "Invalid length '{}' on line {}",
                field,
                record.position().map_or(0, |p| p.line())
            ))
        })?;
        lengths.push(length);
    }
    Ok(lengths)
}

/// Counts of each length in `1..=max_len`; longer lengths are not reported.
/// `max_len` is capped at [`MAX_HISTOGRAM_LEN`].
pub fn length_histogram(lengths: &[usize], max_len: usize) -> Vec<(usize, usize)> {
    let max_len = max_len.min(MAX_HISTOGRAM_LEN);
    let mut counts = vec![0; max_len + 1];
    for &length in lengths {
        if length <= max_len {
            counts[length] += 1;
        }
    }
    counts.into_iter().enumerate().skip(1).collect()
}
