use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, Phase, Position};
use crate::metrics::GameMetrics;

/// What occupies a drawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
    Food,
    Empty,
}

/// Depth layer drawn on screen: the one holding the head
pub fn visible_layer(state: &GameState) -> i32 {
    state.snake.head().z
}

pub fn classify(state: &GameState, pos: Position) -> CellKind {
    if pos == state.snake.head() {
        CellKind::Head
    } else if state.is_occupied_by_snake(pos) {
        CellKind::Body
    } else if state.food == Some(pos) {
        CellKind::Food
    } else {
        CellKind::Empty
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if state.game_over {
            frame.render_widget(self.render_game_over(state, metrics), game_area);
        } else {
            frame.render_widget(self.render_grid(state), game_area);
        }

        frame.render_widget(self.render_controls(state), chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let layer = visible_layer(state);
        let mut lines = Vec::with_capacity(state.space.height());

        for y in 0..state.space.height() {
            let spans: Vec<Span> = (0..state.space.width())
                .map(|x| {
                    let pos = Position::new3(x as i32, y as i32, layer);
                    match classify(state, pos) {
                        CellKind::Head => Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        CellKind::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
                        CellKind::Food => Span::styled(
                            "O ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                        CellKind::Empty => {
                            Span::styled(". ", Style::default().fg(Color::DarkGray))
                        }
                    }
                })
                .collect();

            lines.push(Line::from(spans));
        }

        let mut title = String::from(" Snake ");
        if state.space.is_volumetric() {
            title = format!(" Snake | layer {}/{} ", layer + 1, state.space.depth());
        }
        let border_color = if state.phase() == Phase::Paused {
            title.push_str("| PAUSED ");
            Color::Yellow
        } else {
            Color::White
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border_color))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let mut spans = vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(state.snake.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ];

        if state.space.is_volumetric() {
            let food_layer = state
                .food
                .map(|food| (food.z + 1).to_string())
                .unwrap_or_else(|| "-".to_string());
            spans.push(Span::raw("    "));
            spans.push(Span::styled("Food layer: ", label));
            spans.push(Span::styled(food_layer, value));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Games: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.games_played.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Esc",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, state: &GameState) -> Paragraph<'_> {
        let key = Style::default().fg(Color::Cyan);
        let mut spans = vec![
            Span::styled("↑↓←→", key),
            Span::raw(" or "),
            Span::styled("WASD", key),
            Span::raw(" to move | "),
        ];
        if state.space.is_volumetric() {
            spans.push(Span::styled("Q/E", key));
            spans.push(Span::raw(" in/out | "));
        }
        spans.extend([
            Span::styled("P", key),
            Span::raw(" pause | "),
            Span::styled("R", key),
            Span::raw(" restart | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
