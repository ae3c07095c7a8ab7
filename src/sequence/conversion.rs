//! Base conversion functions for DNA/RNA sequences

/// Convert a DNA base to its complementary base
pub fn complement_base(base: char) -> char {
    match base.to_ascii_uppercase() {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        _ => '?',
    }
}

/// Reverse-complement a DNA sequence (A<->T, G<->C, reversed order)
pub fn reverse_complement(dna: &str) -> String {
    dna.chars().rev().map(complement_base).collect()
}

/// Convert a coding-strand DNA base to its mRNA equivalent (T -> U)
pub fn transcribe_base(base: char) -> char {
    match base.to_ascii_uppercase() {
        'A' => 'A',
        'T' => 'U',
        'G' => 'G',
        'C' => 'C',
        _ => '?',
    }
}

/// Transcribe a coding-strand DNA sequence into mRNA
pub fn transcribe(dna: &str) -> String {
    dna.chars().map(transcribe_base).collect()
}
