pub mod alignment;
pub mod catalog;
pub mod correct;
pub mod lengths;
pub mod pairwise;
pub mod polygon;
pub mod scan;
pub mod writers;

pub use alignment::{Alignment, SeqRecord};
pub use catalog::{catalog_indels, CohortCatalog, CohortRecord, DedupScope, InsertionCatalog};
pub use correct::{correct_positions, IndelEvent};
pub use lengths::{length_histogram, read_catalog_lengths, LengthColumn, MAX_HISTOGRAM_LEN};
pub use pairwise::{analyze_pair, PairwiseIndels};
pub use polygon::{poly_coords, Polygon};
pub use scan::{Carrier, GapClosing};
