//! Display formatting functions for the UI

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::assets::{EmbeddedImage, DNA_IMAGE_CAPTION};

const HELIX_ART: [&str; 6] = [
    "  A---T        G---C  ",
    "   T-----A  C-----G   ",
    "      G---==---C      ",
    "   C-----G  A-----T   ",
    "  T---A        C---G  ",
    " A-----T      G-----C ",
];

/// Build the decorative banner shown above the input field.
///
/// The banner pairs a text rendition of the helix with the caption and the
/// header fields of the decoded embedded image. When decoding failed the
/// caption alone is shown.
pub fn create_banner_lines(image: Option<&EmbeddedImage>) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = HELIX_ART
        .iter()
        .map(|row| {
            Line::from(Span::styled(*row, Style::default().fg(Color::Cyan))).centered()
        })
        .collect();

    let mut caption = vec![Span::styled(
        DNA_IMAGE_CAPTION,
        Style::default().fg(Color::White),
    )];

    if let Some(image) = image {
        caption.push(Span::styled(
            format!("  ({}x{} PNG, {} bytes)", image.width, image.height, image.bytes.len()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    lines.push(Line::from(caption).centered());
    lines
}

/// Format a labeled value as a plain text line
pub fn text_line(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(label.to_string()),
        Span::styled(value, Style::default().fg(value_color)),
    ])
}

/// Format a derived sequence as a code-styled line under its heading
pub fn code_line(value: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {value} "),
        Style::default().fg(Color::Green).bg(Color::Black),
    ))
}
