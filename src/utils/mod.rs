mod aligner;
mod error;
mod io_utils;
mod populations;
mod readers;
mod util;

pub use aligner::{check_aligner_template, run_aligner, DEFAULT_ALIGNER_CMD};
pub use error::{IndelError, IndelResult};
pub use io_utils::{create_writer, output_path};
pub use populations::{Populations, DEFAULT_POPULATIONS};
pub use readers::{open_alignment, open_fasta_reader, open_order, read_order};
pub use util::{handle_error_and_exit, Result};
