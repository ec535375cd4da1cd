pub mod cli;
pub mod commands;
pub mod indel;
pub mod utils;
