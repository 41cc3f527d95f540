//src/stats.rs

use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;

use crate::graph::OverlapGraph;
use crate::types::GraphReportRow;

/// Calculates the distribution of abundances: abundance value -> number of
/// distinct sequences observed exactly that many times.
///
/// The mapping is unbounded and sorted by abundance, so arbitrarily deep
/// coverage cannot overflow a fixed-size histogram. A zero bucket never
/// appears: a live record has abundance of at least 1.
pub fn abundance_distribution(graph: &OverlapGraph) -> BTreeMap<u32, usize> {
    let mut distribution = BTreeMap::new();
    for record in graph.records() {
        *distribution.entry(record.abundance).or_insert(0) += 1;
    }
    distribution
}

/// Calculates the distribution of successor counts: out-degree -> number of
/// distinct sequences with that many successors. Unlike abundance, a zero
/// bucket is meaningful here (sink sequences have no successors).
pub fn out_degree_distribution(graph: &OverlapGraph) -> BTreeMap<usize, usize> {
    let mut distribution = BTreeMap::new();
    for record in graph.records() {
        *distribution.entry(record.successors.len()).or_insert(0) += 1;
    }
    distribution
}

/// Generates a per-sequence report (both structured rows and text).
///
/// Rows come out in ingestion order. The text form is tab-separated with a
/// single header line.
pub fn build_graph_report(graph: &OverlapGraph) -> (Vec<GraphReportRow>, String) {
    let mut rows = Vec::with_capacity(graph.distinct_count());
    let mut text = String::new();
    text.push_str("sequence\tabundance\toutDegree\tbestOverlap\thasPredecessor\n");

    for record in graph.records() {
        let best_overlap = record
            .successors
            .iter()
            .map(|&(_, len)| len)
            .max()
            .unwrap_or(0);

        let row = GraphReportRow {
            sequence: record.sequence.clone(),
            abundance: record.abundance,
            out_degree: record.successors.len(),
            best_overlap,
            has_predecessor: record.in_degree > 0,
        };

        let _ = writeln!(
            text,
            "{}\t{}\t{}\t{}\t{}",
            row.sequence, row.abundance, row.out_degree, row.best_overlap, row.has_predecessor
        );
        rows.push(row);
    }

    (rows, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(min_overlap: usize, reads: &[&str]) -> OverlapGraph {
        let mut graph = OverlapGraph::new(min_overlap).unwrap();
        for read in reads {
            graph.ingest(read);
        }
        graph
    }

    #[test]
    fn test_abundance_distribution_counts_and_sums() {
        let reads = ["ACGTAC", "GTACGG", "ACGTAC", "TTTTT", "ACGTAC"];
        let graph = graph_of(3, &reads);
        let distribution = abundance_distribution(&graph);

        assert_eq!(distribution.get(&1), Some(&2)); // GTACGG, TTTTT
        assert_eq!(distribution.get(&3), Some(&1)); // ACGTAC
        assert_eq!(distribution.get(&0), None);

        // Sum of counts = distinct sequences; weighted sum = total reads
        let distinct: usize = distribution.values().sum();
        assert_eq!(distinct, graph.distinct_count());
        let total: u64 = distribution
            .iter()
            .map(|(&abundance, &count)| abundance as u64 * count as u64)
            .sum();
        assert_eq!(total, graph.reads_ingested());
    }

    #[test]
    fn test_out_degree_distribution() {
        // ACGTAC -> GTACGG; the other two nodes have no successors
        let graph = graph_of(3, &["ACGTAC", "GTACGG", "TTTTT"]);
        let distribution = out_degree_distribution(&graph);

        assert_eq!(distribution.get(&0), Some(&2));
        assert_eq!(distribution.get(&1), Some(&1));
        let counted: usize = distribution.values().sum();
        assert_eq!(counted, graph.distinct_count());
    }

    #[test]
    fn test_empty_graph_distributions_are_empty() {
        let graph = OverlapGraph::new(3).unwrap();
        assert!(abundance_distribution(&graph).is_empty());
        assert!(out_degree_distribution(&graph).is_empty());
    }

    #[test]
    fn test_report_rows_follow_ingestion_order() {
        let graph = graph_of(3, &["ACGTAC", "GTACGG", "ACGTAC"]);
        let (rows, text) = build_graph_report(&graph);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sequence, "ACGTAC");
        assert_eq!(rows[0].abundance, 2);
        assert_eq!(rows[0].out_degree, 1);
        assert_eq!(rows[0].best_overlap, 4);
        assert!(!rows[0].has_predecessor);

        assert_eq!(rows[1].sequence, "GTACGG");
        assert_eq!(rows[1].out_degree, 0);
        assert_eq!(rows[1].best_overlap, 0);
        assert!(rows[1].has_predecessor);

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("sequence\tabundance\toutDegree\tbestOverlap\thasPredecessor")
        );
        assert_eq!(lines.next(), Some("ACGTAC\t2\t1\t4\tfalse"));
    }
}
