use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    ui::{bar_color, base_color, code_line, create_banner_lines, text_line},
    Analysis, App,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Length(6),
            Constraint::Min(16),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_banner(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
    render_results(f, app, chunks[3]);
    render_status_bar(f, app, chunks[4]);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title_widget = Paragraph::new(vec![Line::from(vec![
        Span::styled("DNA Sequence Analyzer", Style::default().fg(Color::Cyan)),
    ])])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title_widget, area);
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    let banner_widget = Paragraph::new(create_banner_lines(app.image.as_ref()))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(banner_widget, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input_spans: Vec<Span> = app
        .raw_input
        .chars()
        .map(|c| {
            let upper = c.to_ascii_uppercase();
            let style = if matches!(upper, 'A' | 'T' | 'G' | 'C') {
                Style::default().fg(base_color(upper))
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(c.to_string(), style)
        })
        .collect();

    let input_widget = Paragraph::new(vec![Line::from(input_spans)])
        .block(
            Block::default()
                .title("Enter a DNA Sequence (A, T, C, G)")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(input_widget, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    match &app.analysis {
        Some(analysis) => {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);

            render_analysis(f, analysis, halves[0]);
            render_frequency_chart(f, analysis, halves[1]);
        }
        None => render_info_message(f, app, area),
    }
}

fn render_analysis(f: &mut Frame, analysis: &Analysis, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Basic Analysis", Style::default().fg(Color::Cyan))),
        text_line("Length: ", format!("{} bases", analysis.length), Color::White),
        text_line("GC Content: ", format!("{:.2}%", analysis.gc_content), Color::Green),
        Line::from(""),
        Line::from("Reverse Complement:"),
        code_line(&analysis.reverse_complement),
        Line::from(""),
        Line::from("Transcription (DNA -> mRNA):"),
        code_line(&analysis.mrna),
        Line::from(""),
        Line::from("Translation (mRNA -> Protein):"),
        code_line(&analysis.protein),
    ];

    let analysis_widget = Paragraph::new(lines)
        .block(Block::default().title("Analysis").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(analysis_widget, area);
}

fn render_frequency_chart(f: &mut Frame, analysis: &Analysis, area: Rect) {
    let bars: Vec<Bar> = analysis
        .frequency
        .iter()
        .enumerate()
        .map(|(slot, (base, count))| {
            Bar::default()
                .value(*count as u64)
                .label(Line::from(base.to_string()))
                .style(Style::default().fg(bar_color(slot)))
                .value_style(Style::default().fg(Color::Black).bg(bar_color(slot)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Nucleotide Count")
                .title_bottom(Line::from("Count"))
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(2);
    f.render_widget(chart, area);
}

fn render_info_message(f: &mut Frame, app: &App, area: Rect) {
    let (message, color) = if app.has_no_valid_bases() {
        ("No valid bases found in the input.", Color::Yellow)
    } else {
        ("Enter a DNA sequence to start analysis.", Color::DarkGray)
    };

    let info_widget = Paragraph::new(vec![Line::from(Span::styled(
        message,
        Style::default().fg(color),
    ))])
    .block(Block::default().title("Analysis").borders(Borders::ALL));
    f.render_widget(info_widget, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = if app.raw_input.is_empty() {
        "Type or paste a sequence. Esc to quit, Ctrl+U to clear."
    } else {
        "Continue typing, or press Esc to quit, Ctrl+U to clear."
    };

    let status_widget = Paragraph::new(vec![Line::from(vec![Span::styled(
        status_text,
        Style::default().fg(Color::White),
    )])])
    .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status_widget, area);
}
