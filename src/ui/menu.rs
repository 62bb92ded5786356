use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Theme;
use crate::game::DeathReason;

const POPUP_WIDTH: u16 = 28;

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        title_line("PAUSED", theme),
        Line::from(""),
        Line::from("[Space]/[P] Resume"),
        footer_line("[Q] Quit", theme),
    ];

    render_popup(frame, area, " pause ", lines);
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    let lines = vec![
        title_line("GAME OVER", theme),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(match death_reason {
            Some(DeathReason::WallCollision) => "Cause: hit wall",
            Some(DeathReason::SelfCollision) => "Cause: hit yourself",
            None => "",
        }),
        Line::from(""),
        Line::from("[Enter]/[R] Play Again"),
        footer_line("[Q] Quit", theme),
    ];

    render_popup(frame, area, " game over ", lines);
}

/// Draws the victory screen shown once the snake fills the board.
pub fn render_victory_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let lines = vec![
        title_line("YOU WIN", theme),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from("The board is full"),
        Line::from(""),
        Line::from("[Enter]/[R] Play Again"),
        footer_line("[Q] Quit", theme),
    ];

    render_popup(frame, area, " victory ", lines);
}

fn title_line(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(text).style(
        Style::default()
            .fg(theme.menu_title)
            .add_modifier(Modifier::BOLD),
    )
}

fn footer_line(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(text).style(Style::default().fg(theme.menu_footer))
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &'static str, lines: Vec<Line<'static>>) {
    // Two rows for the border.
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_popup(area, POPUP_WIDTH, height);
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [mid] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);

    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(mid);

    center
}
