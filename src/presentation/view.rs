use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{form::FormState, gallery::ImageViewer};

use super::components::{render_footer, render_form, render_gallery, render_tabs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Gallery,
    Rsvp,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Gallery, Screen::Rsvp];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Gallery => "Pictures",
            Screen::Rsvp => "RSVP",
        }
    }
}

pub struct UiContext<'a> {
    pub title: &'a str,
    pub screen: Screen,
    pub viewer: &'a ImageViewer,
    pub form: &'a FormState,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_tabs(frame, chunks[0], ctx.title, ctx.screen);
    match ctx.screen {
        Screen::Gallery => render_gallery(frame, chunks[1], ctx.viewer),
        Screen::Rsvp => render_form(frame, chunks[1], ctx.form),
    }
    render_footer(frame, chunks[2], &ctx);
}
