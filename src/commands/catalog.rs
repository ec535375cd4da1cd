use crate::cli::CatalogArgs;
use crate::indel::{catalog_indels, writers::write_catalog};
use crate::utils::{create_writer, open_alignment, Populations, Result};

pub fn catalog(args: CatalogArgs) -> Result<()> {
    let populations = Populations::new(&args.populations)?;
    let alignment = open_alignment(&args.input_path)?;

    let catalog =
        catalog_indels(&alignment, &populations, args.dedup).map_err(|e| e.to_string())?;
    log::info!(
        "Catalogued {} indel records with {} unique insertions from {} sequences",
        catalog.records.len(),
        catalog.insertions.len(),
        alignment.len()
    );

    let writer = create_writer(&args.output_prefix, "indels.csv")?;
    write_catalog(writer, &catalog).map_err(|e| e.to_string())?;
    Ok(())
}
