use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    form::{FieldId, FormState},
    gallery::ImageViewer,
    rsvp::Choice,
};

use super::{Screen, UiContext};

pub fn render_tabs(frame: &mut Frame<'_>, area: Rect, title: &str, screen: Screen) {
    let titles: Vec<Line<'static>> = Screen::ALL
        .iter()
        .map(|screen| Line::from(screen.title()))
        .collect();
    let selected = Screen::ALL
        .iter()
        .position(|candidate| *candidate == screen)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

pub fn render_gallery(frame: &mut Frame<'_>, area: Rect, viewer: &ImageViewer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    let current = viewer.current();
    let details = vec![
        Line::from(Span::styled(
            format!(
                "Picture {} of {}",
                current.index() + 1,
                viewer.images().len()
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("#{}", current.container_id())),
        Line::from(Span::styled(
            current.html(),
            Style::default().fg(Color::Cyan),
        )),
    ];
    let details = Paragraph::new(details)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Current image"));
    frame.render_widget(details, chunks[0]);

    let items: Vec<ListItem<'static>> = viewer
        .images()
        .iter()
        .map(|filename| ListItem::new(filename.clone()))
        .collect();
    let mut state = ListState::default();
    state.select(Some(viewer.current_index()));
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Pictures"))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

pub fn render_form(frame: &mut Frame<'_>, area: Rect, form: &FormState) {
    let fields = form.visible_fields();
    let items: Vec<ListItem<'static>> = fields
        .iter()
        .map(|field| ListItem::new(field_line(form, *field, *field == form.focus())))
        .collect();
    let selected = fields.iter().position(|field| *field == form.focus());
    let mut state = ListState::default();
    state.select(selected);

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("RSVP"))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut state);

    let (Some(row), Some(input)) = (selected, form.text(form.focus())) else {
        return;
    };
    if form.submit_control().is_disabled() {
        return;
    }
    let label_width = label_prefix(form, form.focus()).width() as u16;
    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(2)
        .saturating_add(label_width)
        .saturating_add(input.before_cursor().width() as u16);
    let cursor_y = area.y.saturating_add(1).saturating_add(row as u16);
    if cursor_y < area.bottom().saturating_sub(1) {
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn label_prefix(form: &FormState, field: FieldId) -> String {
    let marker = if form.is_required(field) { "*" } else { " " };
    format!("{marker} {}: ", field.label())
}

pub(crate) fn field_line(form: &FormState, field: FieldId, selected: bool) -> Line<'static> {
    let label_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    if field == FieldId::Submit {
        let control = form.submit_control();
        let style = if control.is_disabled() {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        } else {
            label_style.add_modifier(Modifier::REVERSED)
        };
        return Line::from(Span::styled(format!("[ {} ]", control.label()), style));
    }

    let mut spans = vec![Span::styled(label_prefix(form, field), label_style)];
    if let Some(input) = form.text(field) {
        spans.push(Span::raw(input.value().to_string()));
    } else if let Some(choice) = form.choice(field) {
        spans.extend(radio_spans(choice));
    }
    Line::from(spans)
}

fn radio_spans(choice: Choice) -> Vec<Span<'static>> {
    [Choice::Yes, Choice::No]
        .into_iter()
        .map(|option| {
            let mark = if option == choice { "(•)" } else { "( )" };
            let style = if option == choice {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!("{mark} {option}  "), style)
        })
        .collect()
}

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let mut status = ctx.status_message.to_string();
    if status.trim().is_empty() {
        status = "Ready".to_string();
    }
    let status_widget = Paragraph::new(status)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_widget, chunks[0]);

    let help_widget = Paragraph::new(ctx.help.unwrap_or(" ").to_string())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Actions"));
    frame.render_widget(help_widget, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsvp::{FormVariant, SubmitControl};

    fn form() -> FormState {
        FormState::new(FormVariant::TwoLevel, SubmitControl::default())
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn required_fields_carry_marker() {
        let mut form = form();
        assert_eq!(text(&field_line(&form, FieldId::FullName, false)), "* Full name: ");
        form.set_choice(FieldId::Attending, Choice::Yes);
        let line = field_line(&form, FieldId::PlusOne, false);
        assert!(text(&line).starts_with("* Bringing a plus-one?"));
    }

    #[test]
    fn selected_label_is_highlighted() {
        let form = form();
        let line = field_line(&form, FieldId::Attending, true);
        let span = line.spans.first().expect("label span");
        assert_eq!(span.style.fg, Some(Color::Yellow));
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn radio_marks_current_choice() {
        let mut form = form();
        form.set_choice(FieldId::Attending, Choice::No);
        let line = field_line(&form, FieldId::Attending, false);
        assert!(text(&line).contains("( ) yes"));
        assert!(text(&line).contains("(•) no"));
    }

    #[test]
    fn disabled_submit_shows_pending_label_dimmed() {
        let mut form = form();
        form.set_text(FieldId::FullName, "Ada");
        form.set_choice(FieldId::Attending, Choice::No);
        form.submit();
        let line = field_line(&form, FieldId::Submit, false);
        assert_eq!(text(&line), "[ Saving... ]");
        assert_eq!(line.spans[0].style.fg, Some(Color::DarkGray));
    }
}
