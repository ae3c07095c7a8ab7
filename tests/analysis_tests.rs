use dnascope::sequence::{
    calculate_gc_content, clean_sequence, nucleotide_frequency, reverse_complement, transcribe,
    translate_to_stop,
};
use dnascope::App;

#[test]
fn test_atcg_scenario() {
    let cleaned = clean_sequence("ATCG");
    assert_eq!(cleaned.len(), 4);
    assert_eq!(format!("{:.2}", calculate_gc_content(&cleaned)), "50.00");
    assert_eq!(reverse_complement(&cleaned), "CGAT");
    assert_eq!(transcribe(&cleaned), "AUCG");
}

#[test]
fn test_noisy_input_equals_clean_input() {
    assert_eq!(clean_sequence("atcg xyz123"), "ATCG");
    assert_eq!(clean_sequence("atcg xyz123"), clean_sequence("ATCG"));
}

#[test]
fn test_empty_input_produces_no_analysis() {
    let app = App::new();
    assert!(app.analysis.is_none());

    let mut app = App::new();
    app.on_paste("");
    assert!(app.analysis.is_none());
}

#[test]
fn test_all_invalid_input_is_guarded() {
    // A non-empty input with no valid bases must not reach the GC division.
    let mut app = App::new();
    app.on_paste("123");
    assert!(app.analysis.is_none());
    assert!(app.has_no_valid_bases());
}

#[test]
fn test_aaaa_scenario() {
    let cleaned = clean_sequence("AAAA");
    assert_eq!(format!("{:.2}", calculate_gc_content(&cleaned)), "0.00");
    assert_eq!(reverse_complement(&cleaned), "TTTT");
    assert_eq!(nucleotide_frequency(&cleaned), vec![('A', 4)]);
}

#[test]
fn test_translation_stops_at_stop_codon() {
    // Transcribes to AUGUAA: one methionine, then a stop codon that is
    // excluded from the output.
    let cleaned = clean_sequence("ATGTAA");
    assert_eq!(transcribe(&cleaned), "AUGUAA");
    assert_eq!(translate_to_stop(&cleaned).unwrap(), "M");
}

#[test]
fn test_gc_percentage_matches_definition() {
    for dna in ["G", "GC", "ATG", "ATTTTGCC", "CGCGCGAT"] {
        let g = dna.matches('G').count();
        let c = dna.matches('C').count();
        let expected = 100.0 * (g + c) as f64 / dna.len() as f64;
        let rounded = (expected * 100.0).round() / 100.0;
        let actual = (calculate_gc_content(dna) * 100.0).round() / 100.0;
        assert!((actual - rounded).abs() < 1e-9, "mismatch for {dna}");
    }
}

#[test]
fn test_frequency_sums_to_length() {
    for raw in ["ATCG", "aattccgg", "GATTACA and some noise", ""] {
        let cleaned = clean_sequence(raw);
        let total: usize = nucleotide_frequency(&cleaned).iter().map(|(_, n)| n).sum();
        assert_eq!(total, cleaned.len());
    }
}

#[test]
fn test_full_pipeline_through_app() {
    let mut app = App::new();
    app.on_paste("atg gca\ntaa; noise 12398!?");

    assert_eq!(app.cleaned, "ATGGCATAA");
    let analysis = app.analysis.as_ref().unwrap();
    assert_eq!(analysis.length, 9);
    assert_eq!(analysis.mrna, "AUGGCAUAA");
    assert_eq!(analysis.protein, "MA");
    assert_eq!(analysis.reverse_complement, "TTATGCCAT");

    let total: usize = analysis.frequency.iter().map(|(_, n)| n).sum();
    assert_eq!(total, analysis.length);
}

#[test]
fn test_recompute_is_stateless_across_edits() {
    let mut edited = App::new();
    edited.on_paste("ATC");
    edited.on_key('G');
    edited.on_backspace();
    edited.on_key('G');

    let mut direct = App::new();
    direct.on_paste("ATCG");

    assert_eq!(edited.analysis, direct.analysis);
}
