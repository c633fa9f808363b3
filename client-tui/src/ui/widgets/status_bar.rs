use crate::state::AppState;
use crate::timer::ChessClock;
use chess_rules::Player;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Clocks, side to move and the latest status message.
pub struct StatusBar<'a> {
    pub state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn clock_line(&self, side: Player) -> Line<'static> {
        let running = self.state.clock.active_side() == Some(side);
        let time_style = if running {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("{side} time: "), Style::default().fg(Color::Yellow)),
            Span::styled(
                ChessClock::format_time(self.state.clock.elapsed(side)),
                time_style,
            ),
        ])
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title("Game");
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[0]);

        Paragraph::new(self.clock_line(Player::White)).render(columns[0], buf);
        Paragraph::new(format!("({} to move)", self.state.turn()))
            .alignment(Alignment::Center)
            .render(columns[1], buf);
        Paragraph::new(self.clock_line(Player::Black))
            .alignment(Alignment::Right)
            .render(columns[2], buf);

        let status = self
            .state
            .status_message
            .clone()
            .unwrap_or_else(|| "Ready".to_string());
        Paragraph::new(status)
            .style(Style::default().fg(Color::Green))
            .render(rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_side_to_move_and_clocks() {
        let mut state = AppState::new();
        state.status_message = Some("Check.".to_string());
        let area = Rect::new(0, 0, 72, 4);
        let mut buf = Buffer::empty(area);
        StatusBar::new(&state).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("(White to move)"));
        assert!(text.contains("White time: 0:00"));
        assert!(text.contains("Black time: 0:00"));
        assert!(text.contains("Check."));
    }
}
