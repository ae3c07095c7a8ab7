//! Color definitions for the frequency chart and UI elements

use ratatui::style::Color;

/// Fixed palette for the frequency bars, assigned in first-occurrence order
/// of the bases in the cleaned sequence.
pub const BAR_PALETTE: [Color; 4] = [
    Color::Rgb(0x4c, 0xaf, 0x50),
    Color::Rgb(0x21, 0x96, 0xf3),
    Color::Rgb(0xff, 0xc1, 0x07),
    Color::Rgb(0xf4, 0x43, 0x36),
];

/// Get the palette color for a bar slot
pub fn bar_color(slot: usize) -> Color {
    BAR_PALETTE[slot % BAR_PALETTE.len()]
}

/// Get the display color for a nucleotide base
pub fn base_color(base: char) -> Color {
    match base {
        'A' => Color::Green,
        'T' => Color::Yellow,
        'G' => Color::Cyan,
        'C' => Color::Magenta,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_around() {
        assert_eq!(bar_color(0), BAR_PALETTE[0]);
        assert_eq!(bar_color(4), BAR_PALETTE[0]);
        assert_eq!(bar_color(5), BAR_PALETTE[1]);
    }
}
