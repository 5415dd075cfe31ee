use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::game::{Cell, GameState};
use crate::metrics::GameMetrics;

/// Terminal columns used by one grid cell, so cells look square
const CELL_WIDTH: u16 = 2;

const SNAKE_HEAD: &str = "██";
const SNAKE_BODY: &str = "▓▓";
const APPLE: &str = "● ";
const EMPTY: &str = "· ";

/// Paint one grid cell inside `area`. Cells outside the area are skipped.
pub fn draw_cell(buf: &mut Buffer, area: Rect, cell: Cell, symbol: &str, style: Style) {
    let x = i64::from(area.x) + i64::from(cell.x) * i64::from(CELL_WIDTH);
    let y = i64::from(area.y) + i64::from(cell.y);
    if cell.x < 0 || cell.y < 0 || x >= i64::from(area.right()) || y >= i64::from(area.bottom()) {
        return;
    }
    buf.set_string(x as u16, y as u16, symbol, style);
}

/// The caption line above the board
pub fn caption(state: &GameState) -> String {
    format!(
        " Snake | Esc: quit | Speed: {} | Best length: {} ",
        state.speed, state.best_length
    )
}

/// The board: background, apple and snake
struct Board<'a> {
    state: &'a GameState,
    paused: bool,
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.paused { " PAUSED " } else { " Snake " };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        for cell in self.state.grid.all_cells() {
            draw_cell(buf, inner, cell, EMPTY, Style::default().fg(Color::DarkGray));
        }

        draw_cell(
            buf,
            inner,
            self.state.apple.position(),
            APPLE,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        );

        for &cell in self.state.snake.body().iter().skip(1) {
            draw_cell(buf, inner, cell, SNAKE_BODY, Style::default().fg(Color::Green));
        }

        // Head last, so it stays visible when it overlaps the apple
        draw_cell(
            buf,
            inner,
            self.state.snake.head(),
            SNAKE_HEAD,
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        );
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics, paused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with caption and basic stats
        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the board in the game area
        let board_area = Self::board_area(chunks[1], state);
        frame.render_widget(Board { state, paused }, board_area);

        // Render footer with controls
        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Size of the board with its border, centered in `area`
    fn board_area(area: Rect, state: &GameState) -> Rect {
        let side = |n: usize| u16::try_from(n).unwrap_or(u16::MAX);
        let width = side(state.grid.width())
            .saturating_mul(CELL_WIDTH)
            .saturating_add(2);
        let height = side(state.grid.height()).saturating_add(2);

        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [board] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(column);
        board
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![
            Line::from(Span::styled(
                caption(state),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Length: ", label),
                Span::styled(
                    state.snake.len().to_string(),
                    value.add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Best: ", label),
                Span::styled(state.best_length.to_string(), value),
                Span::raw("    "),
                Span::styled("Speed: ", label),
                Span::styled(state.speed.to_string(), value),
                Span::raw("    "),
                Span::styled("Apples: ", label),
                Span::styled(metrics.apples_eaten.to_string(), value),
                Span::raw("    "),
                Span::styled("Games: ", label),
                Span::styled(metrics.games_played.to_string(), value),
                Span::raw("    "),
                Span::styled("Time: ", label),
                Span::styled(metrics.format_time(), value),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" to pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
