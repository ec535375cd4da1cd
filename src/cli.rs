use crate::indel::{DedupScope, GapClosing, LengthColumn, MAX_HISTOGRAM_LEN};
use crate::utils::{check_aligner_template, Result, DEFAULT_ALIGNER_CMD, DEFAULT_POPULATIONS};
use chrono::Datelike;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="indelscan",
          version=&**FULL_VERSION,
          about="Indel coordinates and cohort indel catalogues from sequence alignments",
          long_about = None,
          disable_help_subcommand = true,
          after_help = format!("Copyright (C) {}     indelscan developers
This program comes with ABSOLUTELY NO WARRANTY.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Indel table and polygon coordinates for one sequence pair")]
    Pairwise(PairwiseArgs),
    #[clap(about = "Polygon coordinates for consecutive pairs of a population alignment")]
    Population(PopulationArgs),
    #[clap(about = "Catalogue of insertions across a cohort alignment")]
    Catalog(CatalogArgs),
    #[clap(about = "Indel length histogram from a cohort catalogue")]
    Lengths(LengthsArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("pairwise")))]
#[command(arg_required_else_help(true))]
pub struct PairwiseArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "FASTA with the aligned pair (unaligned with --align)")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-prefix")]
    #[clap(help = "Prefix for output files")]
    #[clap(value_name = "OUTPUT_PREFIX")]
    #[arg(value_parser = check_prefix_path)]
    pub output_prefix: String,

    #[clap(long = "seq1")]
    #[clap(value_name = "NAME")]
    #[clap(help = "Name of the first sequence (default: first record)")]
    #[clap(requires = "seq2_name")]
    pub seq1_name: Option<String>,

    #[clap(long = "seq2")]
    #[clap(value_name = "NAME")]
    #[clap(help = "Name of the second sequence (default: second record)")]
    #[clap(requires = "seq1_name")]
    pub seq2_name: Option<String>,

    #[clap(long = "align")]
    #[clap(help = "Align the input with the external aligner first")]
    pub align: bool,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "aligner-cmd")]
    #[clap(value_name = "COMMAND")]
    #[clap(help = "Aligner command with {input} and {output} placeholders")]
    #[clap(default_value = DEFAULT_ALIGNER_CMD)]
    #[arg(value_parser = check_aligner_template)]
    pub aligner_cmd: String,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "gap-closing")]
    #[clap(value_name = "RULE")]
    #[clap(help = "Gap run closing rule (both or opposite)")]
    #[clap(default_value = "opposite")]
    pub gap_closing: GapClosing,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("population")))]
#[command(arg_required_else_help(true))]
pub struct PopulationArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "Population alignment FASTA")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-dir")]
    #[clap(help = "Directory for the per-pair coordinate files")]
    #[clap(value_name = "DIR")]
    pub output_dir: PathBuf,

    #[clap(long = "order")]
    #[clap(value_name = "ORDER")]
    #[clap(help = "File with one sequence name per line (default: alignment order)")]
    #[arg(value_parser = check_file_exists)]
    pub order_path: Option<PathBuf>,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "gap-closing")]
    #[clap(value_name = "RULE")]
    #[clap(help = "Gap run closing rule (both or opposite)")]
    #[clap(default_value = "opposite")]
    pub gap_closing: GapClosing,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("catalog")))]
#[command(arg_required_else_help(true))]
pub struct CatalogArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "Cohort alignment FASTA with INDIVIDUAL_ALLELE headers")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-prefix")]
    #[clap(help = "Prefix for output files")]
    #[clap(value_name = "OUTPUT_PREFIX")]
    #[arg(value_parser = check_prefix_path)]
    pub output_prefix: String,

    #[clap(short = 'p')]
    #[clap(long = "populations")]
    #[clap(value_name = "POPULATIONS")]
    #[clap(help = "Population ranges (e.g. 1-8:1,9-18:2) or file of INDIVIDUAL POPULATION lines")]
    #[clap(default_value = DEFAULT_POPULATIONS)]
    pub populations: String,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "dedup")]
    #[clap(value_name = "SCOPE")]
    #[clap(help = "Record an identical insertion once per span, once per run, or always (span, run, none)")]
    #[clap(default_value = "span")]
    pub dedup: DedupScope,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("lengths")))]
#[command(arg_required_else_help(true))]
pub struct LengthsArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "Indel catalogue CSV generated by the catalog command")]
    #[clap(value_name = "CSV")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-prefix")]
    #[clap(help = "Prefix for output files")]
    #[clap(value_name = "OUTPUT_PREFIX")]
    #[arg(value_parser = check_prefix_path)]
    pub output_prefix: String,

    #[clap(long = "max-len")]
    #[clap(value_name = "MAX_LEN")]
    #[clap(help = "Longest indel length to report")]
    #[clap(default_value = "100")]
    #[arg(value_parser = max_len_in_range)]
    pub max_len: usize,

    #[clap(long = "column")]
    #[clap(value_name = "COLUMN")]
    #[clap(help = "Length column to count (full or amino)")]
    #[clap(default_value = "full")]
    pub column: LengthColumn,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn max_len_in_range(s: &str) -> Result<usize> {
    let max_len: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid length", s))?;
    if (1..=MAX_HISTOGRAM_LEN).contains(&max_len) {
        Ok(max_len)
    } else {
        Err(format!(
            "Maximum length must be between 1 and {}",
            MAX_HISTOGRAM_LEN
        ))
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}
