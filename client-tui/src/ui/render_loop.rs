use crate::config::Config;
use crate::state::AppState;
use crate::ui::input::{handle_key_event, InputOutcome};
use crate::ui::widgets::{BoardWidget, StatusBar};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const HELP: &str =
    "arrows/hjkl move | enter/space pick & drop | esc cancel | n new | u undo | s save | o load | q quit";

/// Take over the terminal, run the game until the user quits, then restore it.
pub fn run_app(mut state: AppState, config: &Config) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_ui_loop(&mut terminal, &mut state, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_ui_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    config: &Config,
) -> anyhow::Result<()> {
    loop {
        state.on_tick();
        terminal.draw(|f| draw(f, state))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(key, state, &config.save_path) == InputOutcome::Quit {
                    tracing::info!("quit requested");
                    break;
                }
            }
        }
    }

    Ok(())
}

fn draw(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(BoardWidget::new(state), chunks[0]);
    f.render_widget(StatusBar::new(state), chunks[1]);
    f.render_widget(Paragraph::new(HELP), chunks[2]);
}
