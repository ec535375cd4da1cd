pub mod catalog;
pub mod lengths;
pub mod pairwise;
pub mod population;
