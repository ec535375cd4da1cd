use crate::utils::{IndelError, IndelResult};
use bio::io::fasta;
use std::io::Read;

pub const GAP: u8 = b'-';

#[derive(Debug, Clone, PartialEq)]
pub struct SeqRecord {
    pub name: String,
    pub seq: Vec<u8>,
}

impl SeqRecord {
    pub fn new(name: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            seq: seq.into(),
        }
    }

    pub fn aligned_len(&self) -> usize {
        self.seq.len()
    }

    pub fn unaligned_len(&self) -> usize {
        unaligned_len(&self.seq)
    }
}

pub fn unaligned_len(seq: &[u8]) -> usize {
    seq.iter().filter(|&&base| base != GAP).count()
}

pub fn strip_gaps(seq: &[u8]) -> Vec<u8> {
    seq.iter().copied().filter(|&base| base != GAP).collect()
}

pub fn is_all_gaps(seq: &[u8]) -> bool {
    seq.iter().all(|&base| base == GAP)
}

/// Drops the columns where both sequences hold a gap.
pub fn remove_common_gaps(seq1: &[u8], seq2: &[u8]) -> (Vec<u8>, Vec<u8>) {
    seq1.iter()
        .zip(seq2)
        .filter(|&(&a, &b)| !(a == GAP && b == GAP))
        .map(|(&a, &b)| (a, b))
        .unzip()
}

/// Sequences padded with gaps to a common width.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    records: Vec<SeqRecord>,
}

impl Alignment {
    pub fn new(records: Vec<SeqRecord>) -> IndelResult<Self> {
        let first = records
            .first()
            .ok_or_else(|| IndelError::InputFormat("Alignment contains no sequences".into()))?;
        let width = first.aligned_len();
        if let Some(record) = records.iter().find(|r| r.aligned_len() != width) {
            return Err(IndelError::InputFormat(format!(
                "Sequence {} has aligned length {} but {} has {}",
                record.name,
                record.aligned_len(),
                first.name,
                width
            )));
        }
        Ok(Self { records })
    }

    pub fn from_reader<R: Read>(reader: R) -> IndelResult<Self> {
        let mut records = Vec::new();
        for result in fasta::Reader::new(reader).records() {
            let record =
                result.map_err(|e| IndelError::InputFormat(format!("Malformed FASTA: {}", e)))?;
            if !record.seq().is_ascii() {
                return Err(IndelError::InputFormat(format!(
                    "Sequence {} contains non-ASCII symbols",
                    record.id()
                )));
            }
            records.push(SeqRecord::new(record.id(), record.seq()));
        }
        Self::new(records)
    }

    pub fn records(&self) -> &[SeqRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn width(&self) -> usize {
        self.records.first().map_or(0, SeqRecord::aligned_len)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn get(&self, name: &str) -> IndelResult<&SeqRecord> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| IndelError::SequenceNotFound(name.to_string()))
    }

    pub fn first_pair(&self) -> IndelResult<(&SeqRecord, &SeqRecord)> {
        match self.records.as_slice() {
            [first, second, ..] => Ok((first, second)),
            _ => Err(IndelError::InputFormat(format!(
                "Pairwise analysis needs two sequences, found {}",
                self.records.len()
            ))),
        }
    }
}
