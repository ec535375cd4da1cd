use crate::indel::{correct::IndelEvent, polygon::Polygon};
use crate::utils::IndelResult;
use std::io::Write;

pub fn write_polygons<W: Write>(writer: W, polygons: &[Polygon]) -> IndelResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["X1", "X2", "X3", "X4"])?;
    for polygon in polygons {
        csv_writer.write_record([
            polygon.x1.to_string(),
            polygon.x2.to_string(),
            polygon.y1.to_string(),
            polygon.y2.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_events<W: Write>(writer: W, events: &[IndelEvent]) -> IndelResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Allele", "Position", "Length"])?;
    for event in events {
        csv_writer.write_record([
            event.carrier.to_string(),
            event.start.to_string(),
            event.length.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
