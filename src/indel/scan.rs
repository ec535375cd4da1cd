use crate::{
    indel::{
        alignment::{unaligned_len, Alignment, GAP},
        correct::IndelEvent,
    },
    utils::{IndelError, IndelResult},
};
use itertools::Itertools;
use std::{collections::HashSet, fmt, str::FromStr};

/// Which sequence of a pair holds the inserted residues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Carrier {
    First,
    Second,
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Carrier::First => write!(f, "1"),
            Carrier::Second => write!(f, "2"),
        }
    }
}

/// Rule for ending a pairwise gap run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GapClosing {
    /// Close once both sequences hold residues again.
    Both,
    /// Close once the sequence opposite the carrier holds a residue again.
    Opposite,
}

impl FromStr for GapClosing {
    type Err = &'static str;
    fn from_str(closing: &str) -> Result<Self, Self::Err> {
        match closing {
            "both" => Ok(GapClosing::Both),
            "opposite" => Ok(GapClosing::Opposite),
            _ => Err("Invalid gap closing rule. Options are: both, opposite"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GapRun {
    pub carrier: Carrier,
    pub start: usize,
    pub stop: usize,
    pub length: usize,
}

impl GapRun {
    pub fn to_event(&self) -> IndelEvent {
        IndelEvent {
            carrier: self.carrier,
            start: self.start,
            length: self.length,
        }
    }
}

/// Runs of columns where exactly one sequence of the pair holds residues.
///
/// A run whose columns also hold residues of the non-carrier sequence has no
/// well-defined position in that sequence and is rejected. Only the `Both`
/// rule can produce one, when a gap run in one sequence directly follows a
/// gap run in the other.
pub fn scan_pairwise(
    seq1: &[u8],
    seq2: &[u8],
    closing: GapClosing,
) -> IndelResult<Vec<GapRun>> {
    let mut runs = Vec::new();
    let mut open: Option<(Carrier, usize)> = None;

    for (pos, (&a, &b)) in seq1.iter().zip(seq2).enumerate() {
        if let Some((carrier, start)) = open {
            let closes = match (closing, carrier) {
                (GapClosing::Both, _) => a != GAP && b != GAP,
                (GapClosing::Opposite, Carrier::First) => b != GAP,
                (GapClosing::Opposite, Carrier::Second) => a != GAP,
            };
            if closes {
                runs.push(close_run(seq1, seq2, carrier, start, pos)?);
                open = None;
            }
        }
        // The closing column may itself open the next run
        if open.is_none() {
            open = match (a == GAP, b == GAP) {
                (false, true) => Some((Carrier::First, pos)),
                (true, false) => Some((Carrier::Second, pos)),
                _ => None,
            };
        }
    }

    if let Some((carrier, start)) = open {
        let end = seq1.len().min(seq2.len());
        runs.push(close_run(seq1, seq2, carrier, start, end)?);
    }
    Ok(runs)
}

fn close_run(
    seq1: &[u8],
    seq2: &[u8],
    carrier: Carrier,
    start: usize,
    stop: usize,
) -> IndelResult<GapRun> {
    let (carrier_seq, other_seq) = match carrier {
        Carrier::First => (seq1, seq2),
        Carrier::Second => (seq2, seq1),
    };
    if unaligned_len(&other_seq[start..stop]) > 0 {
        return Err(IndelError::InputFormat(format!(
            "Gap run at columns {}-{} holds residues of both sequences; \
             use the opposite closing rule to split it",
            start, stop
        )));
    }
    Ok(GapRun {
        carrier,
        start,
        stop,
        length: unaligned_len(&carrier_seq[start..stop]),
    })
}

/// Half-open span of alignment columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub stop: usize,
}

impl Span {
    pub(crate) fn len(&self) -> usize {
        self.stop - self.start
    }
}

/// Maximal runs of gaps in a single sequence.
pub fn scan_reference(seq: &[u8]) -> Vec<Span> {
    let chunks = seq.iter().enumerate().chunk_by(|&(_, &base)| base == GAP);
    let spans = chunks
        .into_iter()
        .filter(|(is_gap, _)| *is_gap)
        .filter_map(|(_, mut run)| {
            let (start, _) = run.next()?;
            let stop = run.last().map_or(start, |(pos, _)| pos) + 1;
            Some(Span { start, stop })
        })
        .collect();
    spans
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceSpan {
    pub reference: usize,
    pub span: Span,
}

/// Gap spans of every sequence taken in turn as the reference. A span shared
/// by several sequences is reported once, for the first of them.
pub fn cohort_spans(alignment: &Alignment) -> Vec<ReferenceSpan> {
    let mut seen = HashSet::new();
    let mut spans = Vec::new();
    for (reference, record) in alignment.records().iter().enumerate() {
        for span in scan_reference(&record.seq) {
            if seen.insert(span) {
                spans.push(ReferenceSpan { reference, span });
            }
        }
    }
    log::debug!(
        "Found {} distinct gap spans across {} references",
        spans.len(),
        alignment.len()
    );
    spans
}
