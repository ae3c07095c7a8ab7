pub fn calculate_gc_content(dna: &str) -> f64 {
    if dna.is_empty() {
        return 0.0;
    }

    let gc_count = dna.chars()
        .filter(|&c| c == 'G' || c == 'g' || c == 'C' || c == 'c')
        .count();

    (gc_count as f64 / dna.len() as f64) * 100.0
}

pub fn calculate_at_content(dna: &str) -> f64 {
    if dna.is_empty() {
        return 0.0;
    }

    let at_count = dna.chars()
        .filter(|&c| c == 'A' || c == 'a' || c == 'T' || c == 't')
        .count();

    (at_count as f64 / dna.len() as f64) * 100.0
}

/// Count occurrences of each distinct base, in first-occurrence order.
///
/// The order matters for display: the frequency chart assigns its palette
/// slots by position in this list, so the first base seen in the sequence
/// always gets the first color.
pub fn nucleotide_frequency(dna: &str) -> Vec<(char, usize)> {
    let mut counts: Vec<(char, usize)> = Vec::with_capacity(4);

    for base in dna.chars() {
        match counts.iter_mut().find(|(b, _)| *b == base) {
            Some((_, count)) => *count += 1,
            None => counts.push((base, 1)),
        }
    }

    counts
}
