use crate::cli::LengthsArgs;
use crate::indel::{length_histogram, read_catalog_lengths, writers::write_length_histogram};
use crate::utils::{create_writer, Result};
use std::fs::File;

pub fn lengths(args: LengthsArgs) -> Result<()> {
    let file =
        File::open(&args.input_path).map_err(|e| format!("{}: {}", args.input_path.display(), e))?;
    let lengths = read_catalog_lengths(file, args.column)
        .map_err(|e| format!("{}: {}", args.input_path.display(), e))?;

    let longer = lengths.iter().filter(|&&len| len > args.max_len).count();
    if longer > 0 {
        log::warn!(
            "{} indels are longer than {} and are not counted",
            longer,
            args.max_len
        );
    }

    let histogram = length_histogram(&lengths, args.max_len);
    let writer = create_writer(&args.output_prefix, "lengths.csv")?;
    write_length_histogram(writer, &histogram).map_err(|e| e.to_string())?;
    log::info!("Counted {} indel lengths", lengths.len());
    Ok(())
}
