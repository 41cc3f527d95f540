//src/fastq.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Minimal FASTQ reader that also supports .gz, returning only the sequence
/// line of each record. The overlap graph keys nodes on sequence content
/// alone, so read ids and quality strings are dropped at the boundary.
pub fn read_fastq_sequences<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    let path = path.as_ref();
    let f = File::open(path)?;

    let is_gz = path
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let mut reader: Box<dyn BufRead> = if is_gz {
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };

    let mut sequences = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        // 1) header
        if reader.read_line(&mut line)? == 0 {
            break; // EOF
        }
        if !line.starts_with('@') {
            // Not a valid FASTQ header; skip
            continue;
        }

        // 2) sequence
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let seq = line.trim_end().to_string();

        // 3) plus line
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        // 4) quality
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        sequences.push(seq);
    }

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_plain_fastq() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "@read1\nACGTAC\n+\nIIIIII\n@read2\nGTACGG\n+\nIIIIII\n"
        )
        .unwrap();

        let sequences = read_fastq_sequences(file.path()).unwrap();
        assert_eq!(sequences, vec!["ACGTAC".to_string(), "GTACGG".to_string()]);
    }

    #[test]
    fn test_skips_garbage_before_header() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "junk line\n@read1\nACGTAC\n+\nIIIIII\n").unwrap();

        let sequences = read_fastq_sequences(file.path()).unwrap();
        assert_eq!(sequences, vec!["ACGTAC".to_string()]);
    }

    #[test]
    fn test_empty_file_yields_no_reads() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let sequences = read_fastq_sequences(file.path()).unwrap();
        assert!(sequences.is_empty());
    }
}
