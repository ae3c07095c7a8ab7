use log::{debug, trace, warn};

use crate::assets::{decode_dna_image, EmbeddedImage};
use crate::sequence::{
    calculate_gc_content, clean_sequence, nucleotide_frequency, reverse_complement, transcribe,
    translate_to_stop,
};

/// Derived views of one cleaned sequence. Recomputed from scratch whenever
/// the raw input changes; never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub length: usize,
    pub gc_content: f64,
    pub reverse_complement: String,
    pub mrna: String,
    pub protein: String,
    pub frequency: Vec<(char, usize)>,
}

impl Analysis {
    fn from_cleaned(cleaned: &str) -> Analysis {
        Analysis {
            length: cleaned.len(),
            gc_content: calculate_gc_content(cleaned),
            reverse_complement: reverse_complement(cleaned),
            mrna: transcribe(cleaned),
            // The cleaned sequence is restricted to A/T/G/C, so translation
            // cannot fail here.
            protein: translate_to_stop(cleaned).unwrap_or_default(),
            frequency: nucleotide_frequency(cleaned),
        }
    }
}

pub struct App {
    pub raw_input: String,
    pub cleaned: String,
    pub analysis: Option<Analysis>,
    pub image: Option<EmbeddedImage>,
}

impl App {
    pub fn new() -> App {
        debug!("Creating new App instance");

        let image = match decode_dna_image() {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("Failed to decode embedded banner image: {e}");
                None
            }
        };

        App {
            raw_input: String::new(),
            cleaned: String::new(),
            analysis: None,
            image,
        }
    }

    /// True when the user has typed something but nothing survived cleaning.
    pub fn has_no_valid_bases(&self) -> bool {
        !self.raw_input.is_empty() && self.cleaned.is_empty()
    }

    pub fn on_key(&mut self, c: char) {
        trace!("Appending character {c:?} to raw input");
        self.raw_input.push(c);
        self.update_analysis();
    }

    pub fn on_enter(&mut self) {
        self.raw_input.push('\n');
        self.update_analysis();
    }

    pub fn on_backspace(&mut self) {
        trace!("Removing last character from raw input");
        self.raw_input.pop();
        self.update_analysis();
    }

    pub fn on_paste(&mut self, text: &str) {
        debug!("Pasting {} characters into raw input", text.len());
        self.raw_input.push_str(text);
        self.update_analysis();
    }

    pub fn clear(&mut self) {
        debug!("Clearing raw input");
        self.raw_input.clear();
        self.update_analysis();
    }

    fn update_analysis(&mut self) {
        self.cleaned = clean_sequence(&self.raw_input);

        if self.cleaned.is_empty() {
            // No analysis is attempted on an empty cleaned sequence; the GC
            // percentage would otherwise divide by a zero length.
            if self.has_no_valid_bases() {
                debug!("Input contains no valid bases after cleaning");
            }
            self.analysis = None;
            return;
        }

        trace!(
            "Recomputing analysis for cleaned sequence of length {}",
            self.cleaned.len()
        );
        self.analysis = Some(Analysis::from_cleaned(&self.cleaned));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
