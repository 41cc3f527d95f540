//src/graph.rs

use ahash::{AHashMap, AHashSet};
use rayon::prelude::*;

use crate::overlap::overlap_length;
use crate::types::GraphError;

/// Per-sequence record in the arena. Abundance and in-degree only grow;
/// the successor list is append-only for the lifetime of the graph.
#[derive(Debug)]
pub(crate) struct SequenceRecord {
    pub(crate) sequence: String,
    pub(crate) abundance: u32,
    pub(crate) in_degree: u32,
    /// Outgoing edges as (destination id, overlap length), in discovery order.
    pub(crate) successors: Vec<(usize, usize)>,
}

/// An overlap graph over a stream of reads.
///
/// Distinct sequences live in a dense arena indexed by insertion order, with
/// a side map from sequence content to arena id for deduplication. Two reads
/// with identical sequence strings are the same node: re-ingestion bumps the
/// abundance and performs no edge work.
///
/// The graph is build-only. Once the read stream has been consumed, layout,
/// assembly and statistics are derived read-only views (see `layout` and
/// `stats`).
pub struct OverlapGraph {
    min_overlap: usize,
    records: Vec<SequenceRecord>,
    ids: AHashMap<String, usize>,
    reads_ingested: u64,
}

impl OverlapGraph {
    /// Creates an empty overlap graph with the given minimum overlap.
    ///
    /// Fails with `InvalidConfiguration` when `min_overlap` is zero: a
    /// zero-length overlap would connect every pair of sequences.
    pub fn new(min_overlap: usize) -> Result<Self, GraphError> {
        if min_overlap < 1 {
            return Err(GraphError::InvalidConfiguration { min_overlap });
        }
        Ok(Self {
            min_overlap,
            records: Vec::new(),
            ids: AHashMap::new(),
            reads_ingested: 0,
        })
    }

    /// The configured minimum overlap length.
    pub fn min_overlap(&self) -> usize {
        self.min_overlap
    }

    /// Number of reads ingested so far, duplicates included.
    pub fn reads_ingested(&self) -> u64 {
        self.reads_ingested
    }

    /// Number of distinct sequences in the graph.
    pub fn distinct_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Adds one read's sequence to the graph.
    ///
    /// A duplicate of an already-seen sequence only increments that node's
    /// abundance. A first-seen sequence is compared against every existing
    /// record in both directions; edges at or above the minimum overlap are
    /// recorded in the respective successor lists. The pairwise scan runs in
    /// parallel over a read-only view of the existing records and the
    /// discovered edges are applied afterwards, so ingestions remain
    /// sequentially consistent.
    ///
    /// An empty sequence is accepted and registered like any other node; it
    /// can never gain edges because an overlap is bounded by the sequence
    /// length and the minimum overlap is at least 1.
    pub fn ingest(&mut self, sequence: &str) {
        self.reads_ingested += 1;

        if let Some(&id) = self.ids.get(sequence) {
            self.records[id].abundance += 1;
            return;
        }

        let min_overlap = self.min_overlap;

        // Both directions against the pre-insertion graph state; the new
        // sequence is never compared against itself.
        let hits: Vec<(Option<usize>, Option<usize>)> = self
            .records
            .par_iter()
            .map(|record| {
                let outgoing = overlap_length(sequence, &record.sequence);
                let incoming = overlap_length(&record.sequence, sequence);
                (
                    (outgoing >= min_overlap).then_some(outgoing),
                    (incoming >= min_overlap).then_some(incoming),
                )
            })
            .collect();

        let new_id = self.records.len();
        let mut record = SequenceRecord {
            sequence: sequence.to_string(),
            abundance: 1,
            in_degree: 0,
            successors: Vec::new(),
        };

        for (existing_id, (outgoing, incoming)) in hits.into_iter().enumerate() {
            if let Some(len) = outgoing {
                record.successors.push((existing_id, len));
                self.records[existing_id].in_degree += 1;
            }
            if let Some(len) = incoming {
                self.records[existing_id].successors.push((new_id, len));
                record.in_degree += 1;
            }
        }

        self.records.push(record);
        self.ids.insert(sequence.to_string(), new_id);
    }

    /// Returns the set of distinct sequences added to this graph.
    pub fn distinct_sequences(&self) -> AHashSet<&str> {
        self.records.iter().map(|r| r.sequence.as_str()).collect()
    }

    /// Times the given sequence has been added to this graph.
    pub fn abundance_of(&self, sequence: &str) -> Result<u32, GraphError> {
        self.ids
            .get(sequence)
            .map(|&id| self.records[id].abundance)
            .ok_or_else(|| GraphError::SequenceNotFound(sequence.to_string()))
    }

    /// True iff some other sequence overlaps this one's prefix. Derived from
    /// the in-degree counter, which only ever grows, so the answer can flip
    /// from false to true as reads arrive but never back.
    pub fn has_predecessor(&self, sequence: &str) -> Result<bool, GraphError> {
        self.ids
            .get(sequence)
            .map(|&id| self.records[id].in_degree > 0)
            .ok_or_else(|| GraphError::SequenceNotFound(sequence.to_string()))
    }

    /// Predicts the leftmost sequence of the final assembly: the first
    /// record in ingestion order with no predecessor. Returns `None` when
    /// every sequence has a predecessor (cyclic graph) or the graph is
    /// empty; both are normal outcomes, not errors.
    pub fn find_source_sequence(&self) -> Option<&str> {
        self.find_source_id().map(|id| self.records[id].sequence.as_str())
    }

    pub(crate) fn find_source_id(&self) -> Option<usize> {
        self.records.iter().position(|r| r.in_degree == 0)
    }

    pub(crate) fn record(&self, id: usize) -> &SequenceRecord {
        &self.records[id]
    }

    pub(crate) fn records(&self) -> &[SequenceRecord] {
        &self.records
    }
}
