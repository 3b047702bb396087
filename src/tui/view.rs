use crate::model::{Priority, PriorityColor, ToDo};
use crate::tui::state::{AppState, FormField, HELP_TEXT, InputMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

const ACCENT: Color = Color::Cyan;
const BADGE_WIDTH: usize = 10;

pub fn priority_style(color: PriorityColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_header(f, v_chunks[0]);
    draw_search(f, state, v_chunks[1]);
    draw_list(f, state, v_chunks[2]);
    draw_footer(f, state, v_chunks[3]);

    match state.mode {
        InputMode::Creating => draw_form(f, state),
        InputMode::Folder => draw_folder(f),
        _ => {}
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(12),
        ])
        .split(area);

    let folder = Paragraph::new("< Folder").style(Style::default().fg(ACCENT));
    let title = Paragraph::new("ToDo-List")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    let add = Paragraph::new("+ ")
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Right);
    f.render_widget(folder, h_chunks[0]);
    f.render_widget(title, h_chunks[1]);
    f.render_widget(add, h_chunks[2]);
}

fn draw_search(f: &mut Frame, state: &AppState, area: Rect) {
    let searching = state.mode == InputMode::Searching;
    let (text, style) = if state.query.is_empty() && !searching {
        ("Search".to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (state.query.clone(), Style::default().fg(Color::Green))
    };
    let border = if searching {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let prefix = "/ ";
    let input = Paragraph::new(format!("{}{}", prefix, text))
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    f.render_widget(input, area);

    if searching {
        let cursor_x = area.x + 1 + prefix.chars().count() as u16 + state.cursor_position as u16;
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn task_item<'a>(t: &'a ToDo, marked: bool, date_format: &str, width: usize) -> ListItem<'a> {
    let (icon, icon_style) = if t.is_checked {
        ("✔ ", Style::default().fg(ACCENT))
    } else {
        ("○ ", Style::default().fg(Color::Gray))
    };
    let mark = if marked { "* " } else { "  " };
    let badge = format!("{:^width$}", t.priority.label(), width = BADGE_WIDTH);
    let used = mark.chars().count() + icon.chars().count() + t.task.chars().count() + BADGE_WIDTH;
    let pad = " ".repeat(width.saturating_sub(used));

    let title_line = Line::from(vec![
        Span::styled(mark, Style::default().fg(Color::Red)),
        Span::styled(icon, icon_style),
        Span::styled(t.task.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(pad),
        Span::styled(
            badge,
            Style::default()
                .fg(Color::White)
                .bg(priority_style(t.priority.color()))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let date_line = Line::from(Span::styled(
        format!("    {}", t.format_date(date_format)),
        Style::default().fg(Color::DarkGray),
    ));
    ListItem::new(vec![title_line, date_line])
}

fn draw_list(f: &mut Frame, state: &mut AppState, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let task_items: Vec<ListItem> = state
        .view
        .items(&state.store)
        .map(|t| {
            task_item(
                t,
                state.marked.contains(&t.id),
                &state.config.date_format,
                width,
            )
        })
        .collect();

    let title = if state.query.is_empty() {
        format!(" Tasks ({}) ", state.store.len())
    } else {
        format!(" Tasks ({}/{}) ", state.view.len(), state.store.len())
    };
    let task_list = List::new(task_items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray));
    f.render_stateful_widget(task_list, area, &mut state.list_state);
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect) {
    let f_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);
    let status = Paragraph::new(state.message.clone())
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );
    let help = Paragraph::new(HELP_TEXT)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );
    f.render_widget(status, f_chunks[0]);
    f.render_widget(help, f_chunks[1]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn field_label(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!("{:<11}", label), style)
}

fn draw_form(f: &mut Frame, state: &AppState) {
    let Some(form) = state.form.as_ref() else {
        return;
    };
    let area = centered(f.area(), 54, 13);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" New Item ")
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(inner);

    let focus = state.form_focus;
    let title = Line::from(vec![
        field_label("Title", focus == FormField::Title),
        Span::raw(form.task.as_str()),
    ]);
    f.render_widget(Paragraph::new(title), rows[0]);

    let date = Line::from(vec![
        field_label("Datum", focus == FormField::Date),
        Span::raw("< "),
        Span::styled(
            form.date.format(&state.config.date_format).to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" >"),
    ]);
    f.render_widget(Paragraph::new(date), rows[1]);

    let mut segments = vec![field_label("Priorität", focus == FormField::Priority)];
    for p in Priority::ALL {
        let style = if p == form.priority {
            Style::default()
                .fg(Color::White)
                .bg(priority_style(p.color()))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        segments.push(Span::styled(format!(" {} ", p.label()), style));
        segments.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(segments)), rows[2]);

    let save_style = if form.can_save() {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    };
    let buttons = Line::from(vec![
        Span::styled(" Cancel (Esc) ", Style::default().fg(Color::White).bg(Color::Gray)),
        Span::raw("   "),
        Span::styled(" Save (Enter) ", save_style),
    ])
    .alignment(Alignment::Center);
    f.render_widget(Paragraph::new(buttons), rows[3]);

    if focus == FormField::Title {
        let x = rows[0].x + 11 + form.task.chars().count() as u16;
        f.set_cursor_position((x.min(rows[0].right().saturating_sub(1)), rows[0].y));
    }
}

fn draw_folder(f: &mut Frame) {
    let area = centered(f.area(), 30, 5);
    f.render_widget(Clear, area);
    let panel = Paragraph::new("Folder")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(" Esc: Back "),
        );
    f.render_widget(panel, area);
}
