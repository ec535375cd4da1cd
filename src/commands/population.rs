use crate::cli::PopulationArgs;
use crate::indel::{analyze_pair, writers::write_polygons};
use crate::utils::{open_alignment, open_order, Result};
use itertools::Itertools;
use std::{fs, io::BufWriter};

pub fn population(args: PopulationArgs) -> Result<()> {
    let alignment = open_alignment(&args.input_path)?;
    let order = match &args.order_path {
        Some(path) => open_order(path)?,
        None => alignment.names().map(str::to_string).collect(),
    };
    if order.len() < 2 {
        log::warn!("Fewer than two sequences to compare, nothing to do");
        return Ok(());
    }

    fs::create_dir_all(&args.output_dir)
        .map_err(|e| format!("{}: {}", args.output_dir.display(), e))?;

    let mut pair_count = 0;
    for (name1, name2) in order.iter().tuple_windows() {
        let seq1 = alignment.get(name1).map_err(|e| e.to_string())?;
        let seq2 = alignment.get(name2).map_err(|e| e.to_string())?;
        let result = analyze_pair(&seq1.seq, &seq2.seq, args.gap_closing)
            .map_err(|e| format!("{} vs {}: {}", name1, name2, e))?;

        let path = args
            .output_dir
            .join(format!("{}vs{}coords.csv", name1, name2));
        log::debug!(
            "{} vs {}: {} indels -> {}",
            name1,
            name2,
            result.events.len(),
            path.display()
        );
        let file = fs::File::create(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
        write_polygons(BufWriter::new(file), &result.polygons).map_err(|e| e.to_string())?;
        pair_count += 1;
    }

    log::info!(
        "Wrote coordinates for {} pairs to {}",
        pair_count,
        args.output_dir.display()
    );
    Ok(())
}
