//! UI rendering
//!
//! Render functions read state and draw; they never change it.

use crate::app::{AppState, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Add form
            Constraint::Length(1), // Validation error
            Constraint::Min(3),    // Items
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_input(frame, chunks[0], state);
    render_input_error(frame, chunks[1], state);
    render_items(frame, chunks[2], state);
    render_status_bar(frame, chunks[3], state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error, state);
    }
}

fn color(state: &AppState, color: Color) -> Style {
    if state.config.colors {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

fn symbol<'a>(state: &AppState, unicode: &'a str, ascii: &'a str) -> &'a str {
    if state.config.unicode {
        unicode
    } else {
        ascii
    }
}

fn focus_border(state: &AppState, focus: Focus) -> Style {
    if state.focus == focus {
        color(state, Color::Cyan)
    } else {
        Style::default()
    }
}

/// Render the add form
fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let border_style = if state.list.error().is_some() {
        color(state, Color::Red)
    } else {
        focus_border(state, Focus::Input)
    };

    let pending = state.list.pending_input().value();
    let line = if pending.is_empty() && state.focus != Focus::Input {
        Line::from(Span::styled(
            state.config.input_placeholder.as_str(),
            color(state, Color::DarkGray),
        ))
    } else if state.focus == Focus::Input {
        Line::from(vec![Span::raw(pending), Span::raw(symbol(state, "▏", "_"))])
    } else {
        Line::from(pending)
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .title(" Add task ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(input, area);
}

fn render_input_error(frame: &mut Frame, area: Rect, state: &AppState) {
    if let Some(error) = state.list.error() {
        let text = Paragraph::new(format!(" {}", error))
            .style(color(state, Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(text, area);
    }
}

/// Render the item list, or the empty message when there are no items
fn render_items(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" Tasks ({}) ", state.list.len()))
        .borders(Borders::ALL)
        .border_style(focus_border(state, Focus::List));

    if state.list.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                state.config.empty_message.as_str(),
                color(state, Color::DarkGray),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let edit = state.list.edit();
    let rows: Vec<ListItem> = state
        .list
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if edit.target_index() == Some(index) {
                let scratch = edit.scratch().unwrap_or_default();
                ListItem::new(Line::from(vec![
                    Span::styled(symbol(state, "✎ ", "* "), color(state, Color::Yellow)),
                    Span::styled(scratch, color(state, Color::Yellow)),
                    Span::raw(symbol(state, "▏", "_")),
                ]))
            } else {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>3}. ", index + 1), color(state, Color::DarkGray)),
                    Span::raw(item.as_str()),
                ]))
            }
        })
        .collect();

    let highlight = if state.focus == Focus::List {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let list = List::new(rows)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol(symbol(state, "› ", "> "));

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render status bar with the last message and key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.focus {
        Focus::Input => "Enter: Add | Tab: List | F1: Help | Ctrl+C: Quit",
        Focus::List if state.list.edit().is_editing() => {
            "Enter: Save | Ctrl+E: Edit selected instead | Tab: Add form"
        }
        Focus::List => "e: Edit | d: Delete | a/Tab: Add form | F1: Help | q: Quit",
    };

    let message = state.status.message.as_deref().unwrap_or("Ready");

    let lines = vec![
        Line::from(Span::styled(message, color(state, Color::Green))),
        Line::from(Span::styled(hints, color(state, Color::Gray))),
    ];

    let status = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
    frame.render_widget(status, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  Ctrl+C   - Quit"),
        Line::from("  F1       - Toggle help"),
        Line::from("  Tab      - Switch between add form and list"),
        Line::from(""),
        Line::from("Add form:"),
        Line::from("  Enter    - Add task"),
        Line::from(""),
        Line::from("List:"),
        Line::from("  j/k      - Move selection"),
        Line::from("  e/Enter  - Edit selected task"),
        Line::from("  d/Del    - Delete selected task"),
        Line::from("  q        - Quit"),
        Line::from(""),
        Line::from("Editing:"),
        Line::from("  Enter    - Save"),
        Line::from("  Ctrl+E   - Edit selected task instead (drops changes)"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(color(state, Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, state: &AppState) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            color(state, Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(color(state, Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
