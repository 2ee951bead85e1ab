//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Board, Cell, GameSession, Mark, Outcome, Position};

use super::app::App;

const HELP: &str =
    "Arrows+Enter or 1-9: play | [ ]: history | Home/End | N: new game | S: reset scores | Q: quit";

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let help_height = if app.show_help() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Title
            Constraint::Length(3),           // Scoreboard
            Constraint::Length(3),           // Status
            Constraint::Min(13),             // Board and history
            Constraint::Length(help_height), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_scoreboard(frame, chunks[1], app.session());
    draw_status(frame, chunks[2], app);

    if app.show_history() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(42), Constraint::Length(24)])
            .split(chunks[3]);
        draw_board(frame, cols[0], app.session(), app.cursor());
        draw_history(frame, cols[1], app.session());
    } else {
        draw_board(frame, chunks[3], app.session(), app.cursor());
    }

    if app.show_help() {
        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, session: &GameSession) {
    let score = session.score();
    let line = Line::from(vec![
        Span::styled(format!("X Wins: {}", score.x()), mark_style(Mark::X)),
        Span::raw("    "),
        Span::styled(format!("Draws: {}", score.draws()), Style::default().fg(Color::Gray)),
        Span::raw("    "),
        Span::styled(format!("O Wins: {}", score.o()), mark_style(Mark::O)),
    ]);
    let scoreboard = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(scoreboard, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let banner = match session.outcome() {
        Outcome::Win(mark) => Span::styled(
            format!("Player {} Wins!", mark),
            mark_style(mark).fg(Color::Green),
        ),
        Outcome::Draw => Span::styled("It's a Draw!", Style::default().fg(Color::Magenta)),
        Outcome::InProgress => {
            let mark = session.current_player();
            Span::styled(format!("Current Player: {}", mark), mark_style(mark))
        }
    };

    let line = Line::from(vec![
        banner,
        Span::raw("  "),
        Span::styled(app.status_message(), Style::default().fg(Color::Yellow)),
    ]);
    let status = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, session: &GameSession, cursor: Position) {
    // Center the board
    let board_area = center_rect(area, 40, 11);
    let winning = session.winning_line();
    let board = session.current();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            if let Some(pos) = Position::at(row, col) {
                let highlight = winning.is_some_and(|line| line.contains(&pos));
                draw_cell(frame, cols[col * 2], board, pos, pos == cursor, highlight);
            }
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    pos: Position,
    under_cursor: bool,
    on_winning_line: bool,
) {
    let (symbol, base_style) = match board.get(pos) {
        Cell::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(mark) => (format!(" {} ", mark), mark_style(mark)),
    };

    let style = if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if on_winning_line {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, session: &GameSession) {
    let lines: Vec<Line> = session
        .history()
        .iter()
        .map(|entry| {
            let label = match entry.last_move() {
                Some(mv) => {
                    let key = mv.position.to_index() + 1;
                    format!("{} ({} {})", entry.description(), mv.mark, key)
                }
                None => entry.description(),
            };
            if entry.move_number() == session.cursor() {
                Line::from(Span::styled(
                    format!("> {}", label),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", label))
            }
        })
        .collect();

    let history =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Move History"));
    frame.render_widget(history, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
