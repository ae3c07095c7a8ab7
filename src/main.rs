use std::error::Error;
use std::io;

use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use dnascope::{logging, ui::render_ui, App};

fn main() -> Result<(), Box<dyn Error>> {
    human_panic::setup_panic!();
    logging::set_log_level();
    let _log_file = logging::init_logging()?;
    logging::log_system_info();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| render_ui(f, &app))?;
        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.clear()
                }
                KeyCode::Char(c) => app.on_key(c),
                KeyCode::Enter => app.on_enter(),
                KeyCode::Backspace => app.on_backspace(),
                _ => {}
            },
            Event::Paste(text) => app.on_paste(&text),
            _ => {}
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    logging::log_shutdown();
    Ok(())
}
