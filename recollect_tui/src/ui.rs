//! Board and HUD rendering.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use recollect::CardFace;

const CELL_WIDTH: u16 = 6;
const CELL_HEIGHT: u16 = 3;

/// Draws the whole screen: title, HUD, board, help line.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_hud(f, chunks[1], app);
    render_board(f, chunks[2], app);
    render_help(f, chunks[3]);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("Recollect")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn render_hud(f: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let counters = format!(
        "Time: {}s    Moves: {}",
        game.elapsed_seconds(),
        game.moves()
    );
    let style = if game.is_complete() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    f.render_widget(
        Paragraph::new(counters).alignment(Alignment::Center),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(app.status_message().to_string())
            .style(style)
            .alignment(Alignment::Center),
        rows[1],
    );
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let columns = app.columns();
    let cards = app.game().cards();
    let rows = cards.len().div_ceil(columns);

    let board_area = center_rect(
        area,
        columns as u16 * CELL_WIDTH,
        rows as u16 * CELL_HEIGHT,
    );

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CELL_HEIGHT); rows])
        .split(board_area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CELL_WIDTH); columns])
            .split(*row_area);

        for (col, cell_area) in cell_areas.iter().enumerate() {
            let index = row * columns + col;
            if index < cards.len() {
                render_card(f, *cell_area, app, index);
            }
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, app: &App, index: usize) {
    let card = &app.game().cards()[index];
    let (text, style) = match card.face() {
        CardFace::Hidden => (
            "▒▒".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        CardFace::Revealed => (
            card.symbol().to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        CardFace::Matched => (
            card.symbol().to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };

    let border_style = if index == app.cursor() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cell = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(cell, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("arrows/hjkl: move   enter/space: flip   r: restart   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
