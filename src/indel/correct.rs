use crate::indel::scan::Carrier;
use crate::utils::{IndelError, IndelResult};

/// An insertion carried by one sequence of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndelEvent {
    pub carrier: Carrier,
    pub start: usize,
    pub length: usize,
}

/// Shifts each start left by the lengths of the earlier insertions of the same
/// carrier. Events must be in ascending alignment order.
pub fn correct_positions(events: &[IndelEvent]) -> IndelResult<Vec<IndelEvent>> {
    let mut offset1 = 0;
    let mut offset2 = 0;
    let mut corrected = Vec::with_capacity(events.len());

    for event in events {
        let offset = match event.carrier {
            Carrier::First => &mut offset1,
            Carrier::Second => &mut offset2,
        };
        let start = event.start.checked_sub(*offset).ok_or_else(|| {
            IndelError::InputFormat(format!(
                "Indel at {} overlaps {} earlier inserted residues of allele {}",
                event.start, *offset, event.carrier
            ))
        })?;
        *offset += event.length;
        corrected.push(IndelEvent { start, ..*event });
    }

    Ok(corrected)
}
