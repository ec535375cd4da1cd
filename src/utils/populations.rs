use crate::utils::Result;
use std::{collections::HashMap, fs, io::BufRead, path::Path};

/// Two-population split used for the arctoid cohort: individuals 1-8 and 9-18.
pub const DEFAULT_POPULATIONS: &str = "1-8:1,9-18:2";

/// Assignment of individual IDs to population labels.
#[derive(Debug, PartialEq, Clone)]
pub struct Populations {
    labels: HashMap<u32, u32>,
}

impl Populations {
    /// Loads a partition from a file if `encoding` names one, otherwise parses
    /// it as inline ranges such as `1-8:1,9-18:2`.
    pub fn new(encoding: &str) -> Result<Self> {
        if Path::new(encoding).is_file() {
            let file = fs::File::open(encoding).map_err(|e| format!("File {}: {}", encoding, e))?;
            let reader = std::io::BufReader::new(file);
            return Self::from_reader(reader);
        }
        Self::from_ranges(encoding)
    }

    pub fn from_ranges(encoding: &str) -> Result<Self> {
        let error_msg = |item: &str| format!("Invalid population range '{}' in: {}", item, encoding);
        let mut labels = HashMap::new();

        for item in encoding.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (range, label) = item.split_once(':').ok_or_else(|| error_msg(item))?;
            let label: u32 = label.trim().parse().map_err(|_| error_msg(item))?;
            let (first, last) = match range.split_once('-') {
                Some((first, last)) => (first.trim(), last.trim()),
                None => (range.trim(), range.trim()),
            };
            let first: u32 = first.parse().map_err(|_| error_msg(item))?;
            let last: u32 = last.parse().map_err(|_| error_msg(item))?;
            if first > last {
                return Err(error_msg(item));
            }
            for individual in first..=last {
                insert_label(&mut labels, individual, label)?;
            }
        }

        if labels.is_empty() {
            return Err(format!("No populations defined in: {}", encoding));
        }
        Ok(Self { labels })
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut labels = HashMap::new();

        for (line_number, line) in reader.lines().enumerate() {
            let line =
                line.map_err(|e| format!("Error reading line {}: {}", line_number + 1, e))?;
            if line.trim().is_empty() {
                continue;
            }

            let mut parts = line.split_whitespace();
            let missing = || format!("Missing individual/population at line {}", line_number + 1);
            let individual = parts.next().ok_or_else(missing)?;
            let label = parts.next().ok_or_else(missing)?;

            let individual: u32 = individual.parse().map_err(|_| {
                format!("Invalid individual at line {}: {}", line_number + 1, individual)
            })?;
            let label: u32 = label.parse().map_err(|_| {
                format!("Invalid population at line {}: {}", line_number + 1, label)
            })?;
            insert_label(&mut labels, individual, label)
                .map_err(|e| format!("{} at line {}", e, line_number + 1))?;
        }

        Ok(Self { labels })
    }

    pub fn population_of(&self, individual: u32) -> Option<u32> {
        self.labels.get(&individual).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn insert_label(labels: &mut HashMap<u32, u32>, individual: u32, label: u32) -> Result<()> {
    match labels.insert(individual, label) {
        Some(previous) => Err(format!(
            "Individual {} assigned to populations {} and {}",
            individual, previous, label
        )),
        None => Ok(()),
    }
}
