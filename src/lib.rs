// src/lib.rs
pub mod fastq;
pub mod graph;
pub mod layout;
pub mod overlap;
pub mod stats;
pub mod types;

use std::fmt::Write as FmtWrite;
use std::path::PathBuf;

pub use crate::graph::OverlapGraph;
pub use crate::layout::{assemble, assemble_layout, layout_path};
pub use crate::overlap::overlap_length;
pub use crate::stats::{abundance_distribution, build_graph_report, out_degree_distribution};
pub use crate::types::{GraphError, GraphReportRow, Overlap};

const FASTA_LINE_WIDTH: usize = 60;

/// A struct to hold assembly results with minimal duplication.
/// Only structured data is stored; text outputs are generated on demand.
pub struct AssemblyResults {
    /// The overlap graph built from every ingested read
    pub graph: OverlapGraph,

    /// The greedy layout path through the graph
    pub layout: Vec<Overlap>,

    /// The predicted assembly string
    pub assembly: String,

    /// Structured version of the per-sequence report rows (if generated)
    pub report_rows: Option<Vec<GraphReportRow>>,
}

impl AssemblyResults {
    /// Generate the assembly as a single FASTA record on demand,
    /// wrapped to 60 columns.
    pub fn get_assembly_fasta(&self) -> String {
        let mut output = String::new();
        writeln!(
            output,
            ">assembly length={} edges={}",
            self.assembly.len(),
            self.layout.len()
        )
        .unwrap();
        for chunk in self.assembly.as_bytes().chunks(FASTA_LINE_WIDTH) {
            // sequences are plain ASCII bases
            output.push_str(std::str::from_utf8(chunk).unwrap());
            output.push('\n');
        }
        output
    }

    /// Generate the per-sequence report text on demand
    pub fn get_graph_report(&self) -> Option<String> {
        let rows = self.report_rows.as_ref()?;
        let mut output = String::new();
        output.push_str("sequence\tabundance\toutDegree\tbestOverlap\thasPredecessor\n");
        for row in rows {
            writeln!(
                output,
                "{}\t{}\t{}\t{}\t{}",
                row.sequence, row.abundance, row.out_degree, row.best_overlap, row.has_predecessor
            )
            .unwrap();
        }
        Some(output)
    }

    /// Generate the abundance and out-degree histograms as text on demand
    pub fn get_distribution_text(&self) -> String {
        let mut output = String::new();

        output.push_str("abundance\tsequences\n");
        for (abundance, count) in abundance_distribution(&self.graph) {
            writeln!(output, "{}\t{}", abundance, count).unwrap();
        }

        output.push_str("\noutDegree\tsequences\n");
        for (degree, count) in out_degree_distribution(&self.graph) {
            writeln!(output, "{}\t{}", degree, count).unwrap();
        }

        output
    }
}

/// Unified function to assemble reads from one or multiple FASTQ files.
///
/// Every read from every file is ingested into one overlap graph built with
/// `min_overlap`; the layout and assembly are then derived once and returned
/// together with the graph. Set `generate_report` to also produce the
/// per-sequence report rows.
pub fn assemble_reads(
    reads_paths: Vec<PathBuf>,
    min_overlap: usize,
    generate_report: bool,
) -> Result<AssemblyResults, GraphError> {
    // 1. Build the graph incrementally from every file
    let mut graph = OverlapGraph::new(min_overlap)?;
    for path in reads_paths {
        let sequences = fastq::read_fastq_sequences(&path)?;
        log::info!("loaded {} reads from {}", sequences.len(), path.display());
        for sequence in &sequences {
            graph.ingest(sequence);
        }
    }
    log::info!(
        "overlap graph holds {} distinct sequences from {} reads (min overlap {})",
        graph.distinct_count(),
        graph.reads_ingested(),
        min_overlap
    );

    // 2. Derive layout and assembly from the frozen graph
    let layout = layout_path(&graph);
    let assembly = assemble_layout(&graph, &layout);

    // 3. Generate the report if requested
    let report_rows = if generate_report {
        let (rows, _) = build_graph_report(&graph);
        Some(rows)
    } else {
        None
    };

    Ok(AssemblyResults {
        graph,
        layout,
        assembly,
        report_rows,
    })
}
