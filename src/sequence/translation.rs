use bio_seq::prelude::*;
use bio_seq::translation::{TranslationTable, STANDARD};

/// Translate a DNA coding sequence into a protein, stopping at the first
/// stop codon. The stop symbol itself is excluded from the output, as is
/// any trailing partial codon.
pub fn translate_to_stop(dna: &str) -> Result<String, String> {
    if !dna.chars().all(|c| matches!(c.to_ascii_uppercase(), 'A' | 'T' | 'G' | 'C')) {
        return Err("Invalid DNA sequence".to_string());
    }

    let seq = dna
        .parse::<Seq<Dna>>()
        .map_err(|_| "Invalid DNA sequence".to_string())?;

    let mut protein = String::new();

    for codon_chunk in seq.chunks(3) {
        if codon_chunk.len() == 3 {
            let amino = STANDARD.to_amino(codon_chunk).to_string();
            if amino == "*" {
                break;
            }
            protein.push_str(&amino);
        }
    }

    Ok(protein)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_simple_coding_sequence() {
        assert_eq!(translate_to_stop("ATGAAA").unwrap(), "MK");
    }

    #[test]
    fn stops_at_first_stop_codon() {
        // AUG UAA on the mRNA side: the stop codon ends translation and is
        // excluded from the output.
        assert_eq!(translate_to_stop("ATGTAA").unwrap(), "M");
        assert_eq!(translate_to_stop("ATGTAAAAA").unwrap(), "M");
        assert_eq!(translate_to_stop("ATGTAGATG").unwrap(), "M");
        assert_eq!(translate_to_stop("ATGTGAATG").unwrap(), "M");
    }

    #[test]
    fn ignores_trailing_partial_codon() {
        assert_eq!(translate_to_stop("ATGAA").unwrap(), "M");
        assert_eq!(translate_to_stop("AT").unwrap(), "");
    }

    #[test]
    fn empty_sequence_translates_to_empty_protein() {
        assert_eq!(translate_to_stop("").unwrap(), "");
    }

    #[test]
    fn rejects_non_dna_characters() {
        assert!(translate_to_stop("ATGN").is_err());
        assert!(translate_to_stop("AUG").is_err());
    }
}
