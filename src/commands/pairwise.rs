use crate::cli::PairwiseArgs;
use crate::indel::{
    analyze_pair,
    writers::{write_events, write_polygons},
};
use crate::utils::{create_writer, open_alignment, output_path, run_aligner, Result};

pub fn pairwise(args: PairwiseArgs) -> Result<()> {
    let alignment_path = if args.align {
        let aligned_path = output_path(&args.output_prefix, "aligned.fasta");
        log::info!(
            "Aligning {} into {}",
            args.input_path.display(),
            aligned_path.display()
        );
        run_aligner(&args.aligner_cmd, &args.input_path, &aligned_path)
            .map_err(|e| e.to_string())?;
        aligned_path
    } else {
        args.input_path.clone()
    };

    let alignment = open_alignment(&alignment_path)?;
    let (first, second) = match (&args.seq1_name, &args.seq2_name) {
        (Some(name1), Some(name2)) => (
            alignment.get(name1).map_err(|e| e.to_string())?,
            alignment.get(name2).map_err(|e| e.to_string())?,
        ),
        _ => alignment.first_pair().map_err(|e| e.to_string())?,
    };
    if alignment.len() > 2 && args.seq1_name.is_none() {
        log::warn!(
            "Alignment has {} sequences, using the first two: {} and {}",
            alignment.len(),
            first.name,
            second.name
        );
    }

    let result = analyze_pair(&first.seq, &second.seq, args.gap_closing)
        .map_err(|e| format!("{} vs {}: {}", first.name, second.name, e))?;
    log::info!(
        "{} vs {}: {} indels, {} polygons",
        first.name,
        second.name,
        result.events.len(),
        result.polygons.len()
    );

    // Open both outputs before writing so a bad prefix leaves neither populated
    let coords_writer = create_writer(&args.output_prefix, "coords.csv")?;
    let indels_writer = create_writer(&args.output_prefix, "indels.csv")?;
    write_polygons(coords_writer, &result.polygons).map_err(|e| e.to_string())?;
    write_events(indels_writer, &result.events).map_err(|e| e.to_string())?;
    Ok(())
}
