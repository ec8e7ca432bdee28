use crate::game::{Cell, Player, WinLine, COLS, ROWS};
use crate::session::GameSession;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::notification::{Notification, NotificationKind};

/// Everything the game screen needs for one frame.
pub struct ViewState<'a> {
    pub session: &'a GameSession,
    pub selected_column: usize,
    pub last_move: Option<(usize, usize)>,
    pub win_line: Option<&'a WinLine>,
    pub notification: Option<&'a Notification>,
    pub computer_thinking: bool,
}

pub fn render(frame: &mut Frame, view: &ViewState<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Notification
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_board(frame, view, chunks[1]);
    render_notification(frame, view.notification, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Human => Color::Red,
        Player::Computer => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, view: &ViewState<'_>, area: Rect) {
    let session = view.session;
    let scores = session.scores();

    let (status, color) = if let Some((winner, _)) = session.winner() {
        (format!("{} wins", winner.name()), player_color(winner))
    } else if session.is_stalled() {
        ("Board full".to_string(), Color::Gray)
    } else if view.computer_thinking {
        ("Computer is thinking...".to_string(), player_color(Player::Computer))
    } else {
        let player = session.current_player();
        (format!("{} to move", player.name()), player_color(player))
    };

    let line = Line::from(vec![
        Span::styled(status, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw("   |   "),
        Span::styled(
            format!("Player {}", scores.human),
            Style::default().fg(player_color(Player::Human)),
        ),
        Span::raw(" : "),
        Span::styled(
            format!("{} Computer", scores.computer),
            Style::default().fg(player_color(Player::Computer)),
        ),
    ]);

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, view: &ViewState<'_>, area: Rect) {
    let board = view.session.board();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == view.selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Human => (" ● ", player_color(Player::Human)),
                Cell::Computer => (" ● ", player_color(Player::Computer)),
            };
            let mut style = Style::default().fg(color);
            if view.win_line.is_some_and(|line| line.contains(row, col)) {
                style = style.bg(Color::Green).add_modifier(Modifier::BOLD);
            } else if view.last_move == Some((row, col)) {
                style = style.add_modifier(Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == view.selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_notification(frame: &mut Frame, notification: Option<&Notification>, area: Rect) {
    let (text, color) = match notification {
        Some(note) => {
            let color = match note.kind {
                NotificationKind::Info => Color::Cyan,
                NotificationKind::Success => Color::Green,
                NotificationKind::Error => Color::Red,
            };
            (note.message.as_str(), color)
        }
        None => ("", Color::Reset),
    };

    let widget = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→ or 1-7: Select  |  Enter: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_shows_scores_and_turn() {
        let mut session = GameSession::new();
        session.play(3, Player::Human).unwrap();

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = ViewState {
            session: &session,
            selected_column: 3,
            last_move: Some((5, 3)),
            win_line: None,
            notification: None,
            computer_thinking: true,
        };
        terminal.draw(|f| render(f, &view)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Computer is thinking..."));
        assert!(text.contains("Player 0"));
        assert!(text.contains("0 Computer"));
    }

    #[test]
    fn test_render_shows_notification() {
        let session = GameSession::new();
        let note = Notification::new(
            "Game Start!",
            NotificationKind::Info,
            std::time::Instant::now(),
            std::time::Duration::from_secs(3),
        );

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = ViewState {
            session: &session,
            selected_column: 0,
            last_move: None,
            win_line: None,
            notification: Some(&note),
            computer_thinking: false,
        };
        terminal.draw(|f| render(f, &view)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Game Start!"));
        assert!(text.contains("Player to move"));
    }
}
