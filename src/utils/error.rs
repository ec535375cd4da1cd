/// Failures raised by the indel scanning and cataloguing routines.
#[derive(thiserror::Error, Debug)]
pub enum IndelError {
    /// Malformed FASTA, unequal aligned lengths, or an unexpected sequence header.
    #[error("Invalid input: {0}")]
    InputFormat(String),
    #[error("Sequence not found in alignment: {0}")]
    SequenceNotFound(String),
    #[error("Individual {individual} (sequence {name}) is not assigned to any population")]
    UnrecognizedIndividual { name: String, individual: u32 },
    #[error("Aligner failed: {0}")]
    Aligner(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type IndelResult<T> = std::result::Result<T, IndelError>;
