//src/overlap.rs

/// Returns the length of the maximum overlap between a suffix of `sequence1`
/// and a prefix of `sequence2`, or 0 when no base of `sequence2`'s prefix
/// matches a suffix of `sequence1`.
///
/// The search covers every candidate alignment: candidate lengths are tried
/// from `min(len1, len2)` downward, so the result is the global maximum, not
/// a local extension from the first short match. Identical inputs are not
/// special-cased and yield their full common length; a prefix of `sequence2`
/// longer than `sequence1` can match at most `sequence1.len()` bases.
pub fn overlap_length(sequence1: &str, sequence2: &str) -> usize {
    let s1 = sequence1.as_bytes();
    let s2 = sequence2.as_bytes();
    let max_len = s1.len().min(s2.len());

    // Longest candidate first: the first match found is the maximum.
    for len in (1..=max_len).rev() {
        if s1[s1.len() - len..] == s2[..len] {
            return len;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_suffix_prefix_match() {
        // "GTAC" is both a suffix of the first read and a prefix of the second
        assert_eq!(overlap_length("ACGTAC", "GTACGG"), 4);
        // No shared run at all
        assert_eq!(overlap_length("AAAA", "CCCC"), 0);
        assert_eq!(overlap_length("ACGT", "GGGG"), 0);
    }

    #[test]
    fn test_returns_global_maximum_not_first_hit() {
        // A first-hit scan anchored on 'A' at offset 1 would report 1 here;
        // the true maximum overlap is "ATAT" at a later offset.
        assert_eq!(overlap_length("GATCATAT", "ATATGG"), 4);
        // Periodic sequences: several candidate offsets match, the longest wins
        assert_eq!(overlap_length("ABABAB", "ABABCC"), 4);
    }

    #[test]
    fn test_bounded_by_shorter_sequence() {
        for (a, b) in [
            ("ACGTAC", "GTACGG"),
            ("ACG", "ACGTACGT"),
            ("TTTTTTTT", "TTT"),
            ("", "ACGT"),
            ("ACGT", ""),
        ] {
            assert!(overlap_length(a, b) <= a.len().min(b.len()));
        }
    }

    #[test]
    fn test_identical_sequences_full_length() {
        assert_eq!(overlap_length("ACGT", "ACGT"), 4);
        assert_eq!(overlap_length("A", "A"), 1);
    }

    #[test]
    fn test_full_containment_capped_at_sequence1() {
        // sequence2 extends past sequence1; the match caps at sequence1's length
        assert_eq!(overlap_length("ACG", "ACGTTTT"), 3);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(overlap_length("", ""), 0);
        assert_eq!(overlap_length("ACGT", ""), 0);
        assert_eq!(overlap_length("", "ACGT"), 0);
    }
}
