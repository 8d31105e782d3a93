use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Human-readable pace label for the current tick interval.
#[must_use]
pub fn speed_label(game_speed_ms: u64) -> &'static str {
    if game_speed_ms > 150 {
        "Slow"
    } else if game_speed_ms > 120 {
        "Normal"
    } else if game_speed_ms > 100 {
        "Fast"
    } else {
        "Lightning"
    }
}

/// Accent color for the current level badge.
#[must_use]
pub fn level_color(level: u32) -> Color {
    match level {
        1 => Color::Blue,
        2 => Color::Green,
        3 => Color::Yellow,
        4 => Color::Magenta,
        _ => Color::Gray,
    }
}

/// Renders the one-line stats HUD and returns the remaining play area.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    theme: &Theme,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let sep = Span::styled("  ", Style::default());
    let label = Style::default().fg(theme.hud_label);
    let value = Style::default().fg(theme.hud_value);

    let line = Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(state.score.to_string(), value),
        sep.clone(),
        Span::styled("Best: ", label),
        Span::styled(state.high_score.to_string(), value),
        sep.clone(),
        Span::styled("Level: ", label),
        Span::styled(
            state.level.to_string(),
            Style::default().fg(level_color(state.level)),
        ),
        sep.clone(),
        Span::styled("Foods: ", label),
        Span::styled(state.foods_eaten.to_string(), value),
        sep,
        Span::styled("Speed: ", label),
        Span::styled(speed_label(state.game_speed_ms), value),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        hud_area,
    );

    play_area
}
