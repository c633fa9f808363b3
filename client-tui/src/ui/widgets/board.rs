use crate::state::AppState;
use chess_rules::Tile;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

#[derive(Clone, Copy)]
struct BoardSize {
    square_width: u16,
    square_height: u16,
}

impl BoardSize {
    const SMALL: Self = Self {
        square_width: 3,
        square_height: 1,
    };

    const MEDIUM: Self = Self {
        square_width: 5,
        square_height: 3,
    };

    /// Calculate the best board size for the given area
    fn for_area(area: Rect) -> Self {
        let available_width = area.width.saturating_sub(3); // rank labels
        let available_height = area.height.saturating_sub(1); // file labels

        if available_width >= Self::MEDIUM.square_width * 8
            && available_height >= Self::MEDIUM.square_height * 8
        {
            Self::MEDIUM
        } else {
            Self::SMALL
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SquareHighlight {
    Selected,
    Capture,
    Quiet,
    None,
}

impl SquareHighlight {
    fn bg_color(self, is_light_square: bool) -> Color {
        match self {
            Self::Selected => Color::Green,
            Self::Capture => Color::Rgb(150, 100, 100),
            Self::Quiet => Color::Rgb(100, 150, 100),
            Self::None if is_light_square => Color::Rgb(255, 255, 200),
            Self::None => Color::Rgb(200, 200, 255),
        }
    }
}

pub struct BoardWidget<'a> {
    pub state: &'a AppState,
}

impl<'a> BoardWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn highlight_for(&self, tile: Tile) -> SquareHighlight {
        if self.state.selected == Some(tile) {
            SquareHighlight::Selected
        } else if self.state.highlights.contains(&tile) {
            if self.state.game.board().is_occupied(tile) {
                SquareHighlight::Capture
            } else {
                SquareHighlight::Quiet
            }
        } else {
            SquareHighlight::None
        }
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" ♟ {} to move ", self.state.turn()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let size = BoardSize::for_area(inner);
        let board_width = size.square_width * 8;
        let board_height = size.square_height * 8;

        // Center the board, leaving room for rank labels and file labels
        let offset_x = inner.width.saturating_sub(board_width + 3) / 2;
        let offset_y = inner.height.saturating_sub(board_height + 1) / 2;
        let board_x = inner.x + offset_x + 3;
        let board_y = inner.y + offset_y;
        let label_style = Style::default().fg(Color::Yellow);

        for tile in Tile::all() {
            // Rank 8 at the top
            let row = 7 - tile.rank() as u16;
            let col = tile.file() as u16;
            let x = board_x + col * size.square_width;
            let y = board_y + row * size.square_height;
            if x + size.square_width > inner.right() || y + size.square_height > inner.bottom() {
                continue;
            }

            let is_light = (tile.rank() + tile.file()) % 2 == 1;
            let mut style = Style::default()
                .bg(self.highlight_for(tile).bg_color(is_light))
                .fg(Color::Black);
            if self.state.cursor == tile {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let blank = " ".repeat(size.square_width as usize);
            for dy in 0..size.square_height {
                buf.set_string(x, y + dy, &blank, style);
            }

            if let Some(piece) = self.state.game.board().piece_at(tile) {
                let glyph_x = x + size.square_width / 2;
                let glyph_y = y + size.square_height / 2;
                buf.set_string(
                    glyph_x,
                    glyph_y,
                    piece.symbol().to_string(),
                    style.add_modifier(Modifier::BOLD),
                );
            }

            if col == 0 {
                let label_y = y + size.square_height / 2;
                buf.set_string(board_x - 2, label_y, tile.rank_char().to_string(), label_style);
            }
            if row == 7 {
                let label_x = x + size.square_width / 2;
                let label_y = board_y + board_height;
                if label_y < inner.bottom() {
                    buf.set_string(label_x, label_y, tile.file_char().to_string(), label_style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: &AppState, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        BoardWidget::new(state).render(area, &mut buf);
        buf
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn renders_every_piece_in_the_starting_position() {
        let state = AppState::new();
        let text = buffer_text(&render(&state, 60, 30));
        assert_eq!(text.matches('♙').count(), 8);
        assert_eq!(text.matches('♟').count(), 8 + 1); // plus the title glyph
        assert_eq!(text.matches('♔').count(), 1);
        assert_eq!(text.matches('♛').count(), 1);
    }

    #[test]
    fn small_area_falls_back_to_compact_squares() {
        let state = AppState::new();
        let text = buffer_text(&render(&state, 30, 12));
        assert_eq!(text.matches('♖').count(), 2);
    }

    #[test]
    fn capture_targets_are_marked_differently() {
        let mut state = AppState::new();
        for (from, to) in [("e2", "e4"), ("d7", "d5")] {
            state.activate(from.parse().unwrap());
            state.activate(to.parse().unwrap());
        }
        state.activate("e4".parse().unwrap());
        let widget = BoardWidget::new(&state);
        assert!(matches!(
            widget.highlight_for("d5".parse().unwrap()),
            SquareHighlight::Capture
        ));
        assert!(matches!(
            widget.highlight_for("e5".parse().unwrap()),
            SquareHighlight::Quiet
        ));
        assert!(matches!(
            widget.highlight_for("e4".parse().unwrap()),
            SquareHighlight::Selected
        ));
    }
}
