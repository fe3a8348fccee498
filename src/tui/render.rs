use super::screen::{Focus, Screen};
use crate::error::MAX_INPUT_CHARS;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

const HELP: &str =
    "Tab: move focus | Ctrl+Enter: translate | Enter: press button / pick suggestion | Esc: quit";

pub fn draw(frame: &mut Frame, screen: &Screen) {
    let suggestions_height = screen
        .suggestions
        .as_ref()
        .map(|list| list.phrases.len().max(1) as u16 + 2)
        .unwrap_or(0);

    let [header, texts, controls, error, suggestions, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(suggestions_height),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new("English → Spanish").style(Style::default().add_modifier(Modifier::BOLD)),
        header,
    );

    let [input_area, output_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(texts);
    draw_texts(frame, screen, input_area, output_area);
    draw_controls(frame, screen, controls);

    if let Some(message) = screen.error_message() {
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(Color::Red)),
            error,
        );
    }

    if let Some(list) = screen.suggestions.as_ref() {
        let items: Vec<ListItem> = list.phrases.iter().map(|p| ListItem::new(*p)).collect();
        let mut state = ListState::default();
        if screen.focus == Focus::Suggestions && !list.phrases.is_empty() {
            state.select(Some(list.selected));
        }
        frame.render_stateful_widget(
            List::new(items)
                .block(focus_block("Try these", screen.focus == Focus::Suggestions))
                .highlight_symbol("> ")
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED)),
            suggestions,
            &mut state,
        );
    }

    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        footer,
    );
}

fn draw_texts(frame: &mut Frame, screen: &Screen, input_area: Rect, output_area: Rect) {
    let input_title = format!(
        "English ({}/{})",
        screen.input.trim().chars().count(),
        MAX_INPUT_CHARS
    );
    let mut input_text = screen.input.clone();
    if screen.input_focused() {
        input_text.push('▏');
    }
    frame.render_widget(
        Paragraph::new(input_text)
            .wrap(Wrap { trim: false })
            .block(focus_block(&input_title, screen.input_focused())),
        input_area,
    );

    frame.render_widget(
        Paragraph::new(screen.output.as_str())
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Spanish").borders(Borders::ALL)),
        output_area,
    );
}

fn draw_controls(frame: &mut Frame, screen: &Screen, area: Rect) {
    let [translate_area, clear_area, _] = Layout::horizontal([
        Constraint::Length(20),
        Constraint::Length(11),
        Constraint::Min(0),
    ])
    .areas(area);

    let mut translate_spans = Vec::new();
    if screen.label_visible {
        translate_spans.push(Span::raw("Translate"));
    }
    if screen.spinner_visible {
        translate_spans.push(Span::raw(format!("{} Translating…", screen.spinner_frame())));
    }
    let mut translate_style = Style::default();
    if !screen.submit_enabled {
        translate_style = translate_style.fg(Color::DarkGray);
    }
    frame.render_widget(
        Paragraph::new(Line::from(translate_spans))
            .style(translate_style)
            .block(focus_block("", screen.focus == Focus::Translate)),
        translate_area,
    );

    frame.render_widget(
        Paragraph::new("Clear").block(focus_block("", screen.focus == Focus::Clear)),
        clear_area,
    );
}

fn focus_block(title: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(style)
}
