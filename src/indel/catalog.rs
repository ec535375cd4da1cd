use crate::indel::{
    alignment::{is_all_gaps, strip_gaps, Alignment},
    scan::{cohort_spans, ReferenceSpan},
};
use crate::utils::{IndelError, IndelResult, Populations};
use std::{
    collections::{HashMap, HashSet},
    str::FromStr,
};

/// How often the same insertion may be recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DedupScope {
    /// Once per gap span
    Span,
    /// Once per run
    Run,
    /// For every sequence carrying it
    Disabled,
}

impl FromStr for DedupScope {
    type Err = &'static str;
    fn from_str(scope: &str) -> Result<Self, Self::Err> {
        match scope {
            "span" => Ok(DedupScope::Span),
            "run" => Ok(DedupScope::Run),
            "none" => Ok(DedupScope::Disabled),
            _ => Err("Invalid dedup scope. Options are: span, run, none"),
        }
    }
}

/// Sequence header of the form `INDIVIDUAL_ALLELE`, e.g. `12_1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleName {
    pub individual: u32,
    pub allele: u32,
}

impl SampleName {
    pub fn parse(name: &str) -> IndelResult<Self> {
        let error = || {
            IndelError::InputFormat(format!(
                "Sequence name {} is not of the form INDIVIDUAL_ALLELE",
                name
            ))
        };
        let (individual, allele) = name.split_once('_').ok_or_else(error)?;
        Ok(Self {
            individual: individual.parse().map_err(|_| error())?,
            allele: allele.parse().map_err(|_| error())?,
        })
    }
}

/// Field order gives the output sort order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CohortRecord {
    pub population: u32,
    pub individual: u32,
    pub allele: u32,
    pub position: usize,
    pub id: usize,
    pub full_length: usize,
    pub amino_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub insertion: Vec<u8>,
    pub count: usize,
}

/// Unique gap-stripped insertions, numbered in order of first appearance.
#[derive(Debug, Default)]
pub struct InsertionCatalog {
    ids: HashMap<Vec<u8>, usize>,
    entries: Vec<CatalogEntry>,
}

impl InsertionCatalog {
    /// Returns the ID of `insertion` and counts one more occurrence of it.
    pub fn observe(&mut self, insertion: &[u8]) -> usize {
        if let Some(&id) = self.ids.get(insertion) {
            self.entries[id].count += 1;
            return id;
        }
        let id = self.entries.len();
        self.ids.insert(insertion.to_vec(), id);
        self.entries.push(CatalogEntry {
            insertion: insertion.to_vec(),
            count: 1,
        });
        id
    }

    #[cfg(test)]
    pub fn id_of(&self, insertion: &[u8]) -> Option<usize> {
        self.ids.get(insertion).copied()
    }

    #[cfg(test)]
    pub fn get(&self, id: usize) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    /// Entries paired with their IDs, in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &CatalogEntry)> {
        self.entries.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug)]
pub struct CohortCatalog {
    pub records: Vec<CohortRecord>,
    pub insertions: InsertionCatalog,
}

pub fn catalog_indels(
    alignment: &Alignment,
    populations: &Populations,
    scope: DedupScope,
) -> IndelResult<CohortCatalog> {
    let samples = alignment
        .records()
        .iter()
        .map(|record| SampleName::parse(&record.name))
        .collect::<IndelResult<Vec<_>>>()?;

    let mut insertions = InsertionCatalog::default();
    let mut records = Vec::new();
    let mut found: HashSet<Vec<u8>> = HashSet::new();

    for ReferenceSpan { reference, span } in cohort_spans(alignment) {
        if scope == DedupScope::Span {
            found.clear();
        }

        for (index, (record, sample)) in alignment.records().iter().zip(&samples).enumerate() {
            if index == reference {
                continue;
            }
            let slice = &record.seq[span.start..span.stop];
            if is_all_gaps(slice) {
                continue;
            }
            let insertion = strip_gaps(slice);
            if scope != DedupScope::Disabled && !found.insert(insertion.clone()) {
                continue;
            }

            let population = populations.population_of(sample.individual).ok_or_else(|| {
                IndelError::UnrecognizedIndividual {
                    name: record.name.clone(),
                    individual: sample.individual,
                }
            })?;
            let id = insertions.observe(&insertion);
            records.push(CohortRecord {
                population,
                individual: sample.individual,
                allele: sample.allele,
                position: span.start,
                id,
                full_length: span.len(),
                amino_length: insertion.len(),
            });
        }
    }

    records.sort();
    log::debug!(
        "Recorded {} insertions, {} unique",
        records.len(),
        insertions.len()
    );
    Ok(CohortCatalog {
        records,
        insertions,
    })
}
