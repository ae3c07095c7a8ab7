//! Raw input cleaning

/// Uppercase the input and keep only recognized nucleotide letters.
///
/// Everything that is not A, T, G or C after case normalization (digits,
/// punctuation, whitespace, other letters) is silently dropped. The result
/// may be empty.
pub fn clean_sequence(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| matches!(c, 'A' | 'T' | 'G' | 'C'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_and_keeps_valid_bases() {
        assert_eq!(clean_sequence("atcg"), "ATCG");
        assert_eq!(clean_sequence("AtCg"), "ATCG");
        assert_eq!(clean_sequence("ATCG"), "ATCG");
    }

    #[test]
    fn drops_invalid_characters() {
        assert_eq!(clean_sequence("atcg xyz123"), "ATCG");
        assert_eq!(clean_sequence("A T\nC\tG"), "ATCG");
        assert_eq!(clean_sequence("N-R.U!"), "");
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert_eq!(clean_sequence(""), "");
        assert_eq!(clean_sequence("123 !?"), "");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let inputs = ["atcg xyz123", "", "AAAA", "ggc\ncat", "uUnN"];
        for input in inputs {
            let once = clean_sequence(input);
            assert_eq!(clean_sequence(&once), once);
        }
    }

    #[test]
    fn output_alphabet_is_restricted() {
        let cleaned = clean_sequence("the quick brown fox jumps over the lazy dog");
        assert!(cleaned.chars().all(|c| matches!(c, 'A' | 'T' | 'G' | 'C')));
    }
}
