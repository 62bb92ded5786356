use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::{GameState, GameStatus};

const HUD_SEPARATOR: &str = " │ ";

/// Renders the two-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, score_area, status_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let values = HudValues::from_state(state);
    let compact = values.width(false) > usize::from(score_area.width);

    frame.render_widget(
        Paragraph::new(values.line(compact, theme))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hud_text)),
        score_area,
    );

    frame.render_widget(
        Paragraph::new(status_line(state, theme))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hud_text)),
        status_area,
    );

    play_area
}

/// Numbers shown on the top HUD row.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct HudValues {
    score: u32,
    length: usize,
    width: u16,
    height: u16,
}

impl HudValues {
    fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            length: state.snake.len(),
            width: state.config.width,
            height: state.config.height,
        }
    }

    fn labels(compact: bool) -> [&'static str; 2] {
        if compact {
            ["S", "L"]
        } else {
            ["Score", "Length"]
        }
    }

    fn texts(self, compact: bool) -> [String; 3] {
        let [score_label, length_label] = Self::labels(compact);
        [
            format!("{score_label}: {}", self.score),
            format!("{length_label}: {}", self.length),
            format!("{}x{}", self.width, self.height),
        ]
    }

    fn width(self, compact: bool) -> usize {
        let texts = self.texts(compact);
        texts.iter().map(|text| text.width()).sum::<usize>()
            + HUD_SEPARATOR.width() * (texts.len() - 1)
    }

    fn line(self, compact: bool, theme: &Theme) -> Line<'static> {
        let [score_label, length_label] = Self::labels(compact);
        let value_style = Style::default().fg(theme.hud_value);

        Line::from(vec![
            Span::raw(format!("{score_label}: ")),
            Span::styled(
                self.score.to_string(),
                value_style.add_modifier(Modifier::BOLD),
            ),
            Span::raw(HUD_SEPARATOR),
            Span::raw(format!("{length_label}: ")),
            Span::styled(self.length.to_string(), value_style),
            Span::raw(HUD_SEPARATOR),
            Span::styled(format!("{}x{}", self.width, self.height), value_style),
        ])
    }
}

fn status_line(state: &GameState, theme: &Theme) -> Line<'static> {
    let status_style = match state.status {
        GameStatus::GameOver => Style::default().fg(theme.food),
        GameStatus::Won => Style::default().fg(theme.menu_title),
        GameStatus::Running if state.paused => Style::default().fg(theme.hud_value),
        GameStatus::Running => Style::default().fg(theme.snake_body),
    };

    Line::from(vec![
        Span::styled(state.status_label(), status_style.add_modifier(Modifier::BOLD)),
        Span::raw(HUD_SEPARATOR),
        Span::raw("[Space] Pause  [R] Restart  [Q] Quit"),
    ])
}
