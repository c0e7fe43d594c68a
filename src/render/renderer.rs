use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Board, GameState};

/// Terminal columns used for one board block
const BLOCK_COLUMNS: u16 = 2;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState) {
        let area = board_area(frame.area(), &state.board);

        let grid = self.render_grid(state);
        frame.render_widget(grid, area);

        if !state.is_alive {
            let popup = centered_rect(26, 6, area);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(state), popup);
        }
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let board = &state.board;
        let mut lines = Vec::with_capacity(board.rows().max(0) as usize);

        for row in 0..board.rows() {
            let mut spans = Vec::with_capacity(board.columns().max(0) as usize);

            for column in 0..board.columns() {
                let cell = board.cell_at(column, row);

                let span = if state.is_occupied_by_snake(cell) {
                    // Filled segment with a lighter inner square
                    Span::styled(
                        "▐▌",
                        Style::default().fg(Color::LightBlue).bg(Color::Blue),
                    )
                } else if cell == state.food {
                    Span::styled("██", Style::default().fg(Color::Red))
                } else {
                    Span::raw("  ")
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(Span::styled(
                    format!(" Score: {} ", state.score),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
                .title_bottom(
                    Line::from(vec![
                        Span::styled(" ↑↓←→", Style::default().fg(Color::Cyan)),
                        Span::raw(" or "),
                        Span::styled("WASD", Style::default().fg(Color::Cyan)),
                        Span::raw(" to move | "),
                        Span::styled("Q", Style::default().fg(Color::Red)),
                        Span::raw(" to quit "),
                    ])
                    .centered(),
                ),
        )
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::raw(state.score.to_string()),
            ]),
            Line::from(vec![
                Span::styled("SPACE", Style::default().fg(Color::Green)),
                Span::styled(" finish  ", Style::default().fg(Color::Gray)),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::styled(" quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Area of the bordered board, centered and clipped to `area`
fn board_area(area: Rect, board: &Board) -> Rect {
    let width = (board.columns().max(0) as u16 * BLOCK_COLUMNS + 2).min(area.width);
    let height = (board.rows().max(0) as u16 + 2).min(area.height);
    centered_rect(width, height, area)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
