use crate::indel::catalog::CohortCatalog;
use crate::utils::IndelResult;
use std::io::Write;

const RECORD_HEADER: [&str; 7] = [
    "Population",
    "Individual",
    "Allele",
    "Position",
    "ID",
    "Full Length",
    "Amino Acid Length",
];

/// Writes the indel table, two blank lines, then the insertion table.
pub fn write_catalog<W: Write>(mut writer: W, catalog: &CohortCatalog) -> IndelResult<()> {
    {
        let mut csv_writer = csv::Writer::from_writer(&mut writer);
        csv_writer.write_record(RECORD_HEADER)?;
        for record in &catalog.records {
            csv_writer.write_record([
                record.population.to_string(),
                record.individual.to_string(),
                record.allele.to_string(),
                record.position.to_string(),
                record.id.to_string(),
                record.full_length.to_string(),
                record.amino_length.to_string(),
            ])?;
        }
        csv_writer.flush()?;
    }

    writer.write_all(b"\n\n")?;

    let mut csv_writer = csv::Writer::from_writer(&mut writer);
    csv_writer.write_record(["ID", "Count", "Insertion"])?;
    for (id, entry) in catalog.insertions.iter() {
        csv_writer.write_record([
            id.to_string(),
            entry.count.to_string(),
            String::from_utf8_lossy(&entry.insertion).into_owned(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_length_histogram<W: Write>(
    writer: W,
    histogram: &[(usize, usize)],
) -> IndelResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Length", "Count"])?;
    for (length, count) in histogram {
        csv_writer.write_record([length.to_string(), count.to_string()])?;
    }
    csv_writer.flush()?;
    Ok(())
}
