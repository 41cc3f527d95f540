use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use overlap_rs::assemble_reads;

fn spinner(color: &str, message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[
                "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
            ])
            .template(&format!("{{spinner:.{color}}} {{msg}}"))
            .expect("Invalid spinner template"),
    );
    bar.set_message(message.to_string());
    bar
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <reads_dir> <min_overlap>", args[0]);
        process::exit(1);
    }
    let reads_dir = &args[1];
    let min_overlap: usize = args[2].parse().expect("min_overlap must be an integer");

    // 1. Spinner for gathering *.fastq or *.fastq.gz files
    let bar = spinner("blue", &format!("Gathering FASTQ files under '{reads_dir}'..."));

    let read_files: Vec<PathBuf> = fs::read_dir(reads_dir)
        .unwrap_or_else(|_| panic!("Cannot read directory '{reads_dir}'"))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            let filename = path.file_name()?.to_string_lossy().to_lowercase();
            if filename.ends_with(".fastq") || filename.ends_with(".fastq.gz") {
                Some(path)
            } else {
                None
            }
        })
        .collect();

    bar.finish_with_message(format!("Found {} FASTQ file(s).", read_files.len()));

    // 2. Spinner for building the graph and assembling
    let bar = spinner("green", "Building overlap graph and assembling...");

    let results =
        assemble_reads(read_files, min_overlap, true).expect("Assembly failed");

    bar.finish_with_message(format!(
        "Assembled {} reads ({} distinct) into {} bases over {} overlap edges.",
        results.graph.reads_ingested(),
        results.graph.distinct_count(),
        results.assembly.len(),
        results.layout.len(),
    ));

    // 3. Spinner for writing outputs
    let bar = spinner("yellow", "Writing output files...");

    fs::write("assembly.fa", results.get_assembly_fasta())
        .expect("Could not write assembly.fa");

    if let Some(report_text) = results.get_graph_report() {
        fs::write("graph_report.txt", report_text)
            .expect("Could not write graph_report.txt");
    }

    fs::write("distributions.txt", results.get_distribution_text())
        .expect("Could not write distributions.txt");

    bar.finish_with_message("Output files created.");
}
