use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::editor::{EditorState, LoadState};
use crate::form::{Field, FormState};

/// Lines each record takes in the list: name, then place.
const ROW_HEIGHT: u16 = 2;
const LABEL_WIDTH: u16 = 12;

/// Render the editor state to the terminal.
pub fn draw(frame: &mut Frame, state: &EditorState) {
    let chunks = split(frame.area());

    draw_header(frame, chunks[0]);
    draw_list(frame, state, chunks[1]);
    draw_status_bar(frame, state, chunks[2]);

    if state.menu_open {
        draw_menu(frame, state, chunks[1]);
    }
    if let Some(form) = &state.form {
        draw_form(frame, state, form);
    }
}

/// How many records fit in a terminal of `height` rows.
pub fn visible_rows(height: u16) -> usize {
    let list_height = height.saturating_sub(2);
    (list_height / ROW_HEIGHT) as usize
}

fn split(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(1),    // list
            Constraint::Length(1), // status bar
        ])
        .split(area)
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" Users", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            "   n new · e edit · m menu · q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_list(frame: &mut Frame, state: &EditorState, area: Rect) {
    let placeholder = match state.load {
        LoadState::Pending => Some("...loading..."),
        _ if state.records.is_empty() => Some("No users. Press n to add one."),
        _ => None,
    };
    if let Some(text) = placeholder {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {text}"),
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(paragraph, area);
        return;
    }

    let capacity = (area.height / ROW_HEIGHT) as usize;
    let mut lines: Vec<Line> = Vec::with_capacity(capacity * ROW_HEIGHT as usize);

    for (index, record) in state
        .records
        .iter()
        .enumerate()
        .skip(state.scroll_offset)
        .take(capacity)
    {
        let highlighted = index == state.cursor;
        let marker = if highlighted { "▌" } else { " " };
        let base = if highlighted {
            Style::default().bg(Color::Rgb(40, 40, 60))
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, base.fg(Color::Magenta)),
            Span::styled(
                format!(" {}", record.name.first),
                base.add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(marker, base.fg(Color::Magenta)),
            Span::styled(format!(" {}", record.place()), base.fg(Color::Gray)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(Block::default()), area);
}

fn draw_menu(frame: &mut Frame, state: &EditorState, list_area: Rect) {
    let Some(index) = state.selected else {
        return;
    };
    let row = index.saturating_sub(state.scroll_offset) as u16 * ROW_HEIGHT;
    let width = 16.min(list_area.width);
    let height = 4.min(list_area.height);
    let x = list_area.right().saturating_sub(width + 1);
    let y = (list_area.y + row).min(list_area.bottom().saturating_sub(height));
    let area = Rect::new(x, y, width, height);

    let lines = vec![
        Line::from(vec![
            Span::styled(" e", Style::default().fg(Color::Yellow)),
            Span::raw(" Edit"),
        ]),
        Line::from(vec![
            Span::styled(" d", Style::default().fg(Color::Yellow)),
            Span::raw(" Delete"),
        ]),
    ];
    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn draw_form(frame: &mut Frame, state: &EditorState, form: &FormState) {
    let area = centered_rect(60, 80, frame.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", state.mode.form_title()));
    let inner = block.inner(area);

    let errors = form.visible_errors();
    let mut lines = vec![
        Line::from(Span::styled(
            "Tab next field · Enter save · Esc close",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    let mut cursor = None;

    for field in Field::ALL {
        let active = field == form.focus;
        let input = form.input(field);
        let label_style = if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        if active {
            let column = u16::try_from(input.cursor_width()).unwrap_or(u16::MAX);
            cursor = Some((
                inner.x.saturating_add(LABEL_WIDTH).saturating_add(column),
                inner.y + lines.len() as u16,
            ));
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize),
                label_style,
            ),
            Span::raw(input.as_string()),
        ]));

        let error_line = match errors.get(&field) {
            Some(msg) => Line::from(Span::styled(
                format!("{:<width$}{msg}", "", width = LABEL_WIDTH as usize),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(""),
        };
        lines.push(error_line);
    }

    lines.push(Line::from(Span::styled(
        "[ Save ]",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);

    if let Some((x, y)) = cursor {
        if x < inner.right() && y < inner.bottom() {
            frame.set_cursor_position((x, y));
        }
    }
}

fn draw_status_bar(frame: &mut Frame, state: &EditorState, area: Rect) {
    let mode_str = format!(" {} ", state.mode);
    let count = format!("{} users ", state.records.len());
    let message = state.status.clone().unwrap_or_default();
    let status = format!(" {message}");
    // Right-align the record count
    let spacing_len =
        (area.width as usize).saturating_sub(mode_str.len() + status.chars().count() + count.len());
    let spacing = " ".repeat(spacing_len);

    let status_line = Line::from(vec![
        Span::styled(
            mode_str,
            Style::default()
                .bg(Color::Magenta)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{status}{spacing}{count}"),
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}
