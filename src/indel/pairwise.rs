use crate::indel::{
    alignment::{remove_common_gaps, unaligned_len},
    correct::{correct_positions, IndelEvent},
    polygon::{poly_coords, Polygon},
    scan::{scan_pairwise, GapClosing, GapRun},
};
use crate::utils::{IndelError, IndelResult};

#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseIndels {
    /// Indels with starts in unaligned coordinates
    pub events: Vec<IndelEvent>,
    pub polygons: Vec<Polygon>,
}

pub fn analyze_pair(
    seq1: &[u8],
    seq2: &[u8],
    closing: GapClosing,
) -> IndelResult<PairwiseIndels> {
    if seq1.len() != seq2.len() {
        return Err(IndelError::InputFormat(format!(
            "Aligned sequences differ in length: {} vs {}",
            seq1.len(),
            seq2.len()
        )));
    }

    let (seq1, seq2) = remove_common_gaps(seq1, seq2);
    let runs = scan_pairwise(&seq1, &seq2, closing)?;
    log::trace!("Gap runs: {:?}", runs);

    let raw_events: Vec<IndelEvent> = runs.iter().map(GapRun::to_event).collect();
    let events = correct_positions(&raw_events)?;
    let polygons = poly_coords(&events, unaligned_len(&seq1), unaligned_len(&seq2));

    Ok(PairwiseIndels { events, polygons })
}
