use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::{
    form::{FieldId, FormCommand, FormState, SubmitResult},
    gallery::{ImageViewer, Navigation},
    presentation::{self, Screen, UiContext},
    rsvp::RsvpSubmission,
};

use super::{
    input::{AppCommand, CommandDispatch, contexts_for, dispatch},
    keymap::KeymapContext,
    options::UiOptions,
    status::StatusLine,
    terminal::KioskTerminal,
};

impl Screen {
    fn context(self) -> KeymapContext {
        match self {
            Screen::Gallery => KeymapContext::Gallery,
            Screen::Rsvp => KeymapContext::Form,
        }
    }

    fn step(self, delta: i32) -> Self {
        // two screens: any odd step flips
        if delta % 2 == 0 {
            return self;
        }
        match self {
            Screen::Gallery => Screen::Rsvp,
            Screen::Rsvp => Screen::Gallery,
        }
    }
}

pub(crate) struct App {
    title: String,
    viewer: ImageViewer,
    form: FormState,
    screen: Screen,
    options: UiOptions,
    status: StatusLine,
    should_quit: bool,
    result: Option<RsvpSubmission>,
}

impl App {
    pub fn new(title: String, viewer: ImageViewer, form: FormState, options: UiOptions) -> Self {
        let screen = if options.start_on_form {
            Screen::Rsvp
        } else {
            Screen::Gallery
        };
        Self {
            title,
            viewer,
            form,
            screen,
            options,
            status: StatusLine::new(),
            should_quit: false,
            result: None,
        }
    }

    pub fn run(&mut self) -> Result<Option<RsvpSubmission>> {
        let mut terminal = KioskTerminal::enter(self.options.tick_rate)?;
        while !self.should_quit {
            terminal.render(|frame| self.draw(frame))?;
            if let Some(key) = terminal.next_key()? {
                self.handle_key(key);
            }
        }
        Ok(self.result.take())
    }

    fn current_help_text(&self) -> Option<String> {
        if !self.options.show_help {
            return None;
        }
        self.options
            .keymap_store
            .help_text(&contexts_for(self.screen.context()))
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = self.current_help_text();
        presentation::draw(
            frame,
            UiContext {
                title: &self.title,
                screen: self.screen,
                viewer: &self.viewer,
                form: &self.form,
                status_message: self.status.message(),
                help: help.as_deref(),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let action = self
            .options
            .keymap_store
            .classify(&contexts_for(self.screen.context()), &key);
        match dispatch(action, key) {
            CommandDispatch::Form(FormCommand::Submit) => self.on_submit(),
            CommandDispatch::Form(command) => {
                self.form.apply(command);
                self.status.editing(self.form.focus());
            }
            CommandDispatch::App(command) => self.handle_app_command(command),
            CommandDispatch::Input(event) => self.handle_field_input(&event),
        }
    }

    fn handle_app_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::Quit => self.should_quit = true,
            AppCommand::ResetStatus => self.status.ready(),
            AppCommand::ScreenStep(delta) => {
                self.screen = self.screen.step(delta);
                debug!(screen = ?self.screen, "screen switched");
                match self.screen {
                    Screen::Gallery => self.report_picture(),
                    Screen::Rsvp => self.status.editing(self.form.focus()),
                }
            }
            AppCommand::GalleryStep(delta) => {
                if let Some(navigation) = Navigation::from_delta(delta) {
                    self.viewer.navigate(navigation);
                    self.report_picture();
                }
            }
        }
    }

    fn handle_field_input(&mut self, key: &KeyEvent) {
        if self.screen != Screen::Rsvp {
            return;
        }
        if self.form.focus() == FieldId::Submit && key.code == KeyCode::Enter {
            self.on_submit();
            return;
        }
        if self.form.handle_key(key) {
            self.status.editing(self.form.focus());
        }
    }

    fn on_submit(&mut self) {
        match self.form.submit() {
            SubmitResult::Blocked(missing) => self.status.missing_fields(&missing),
            SubmitResult::Submitted(submission) => {
                self.status.submitted(&submission.guest_line());
                self.result = Some(submission);
            }
            SubmitResult::AlreadyPending => self.status.already_pending(),
        }
    }

    fn report_picture(&mut self) {
        let current = self.viewer.current();
        self.status
            .picture(current.index(), self.viewer.images().len(), current.filename());
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::{
        config::SiteConfig,
        rsvp::{Choice, FormVariant},
    };

    fn app() -> App {
        let config = SiteConfig::default();
        let viewer = config.image_viewer().unwrap();
        let form = FormState::new(FormVariant::TwoLevel, config.submit_control());
        App::new(config.title, viewer, form, UiOptions::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn chord(app: &mut App, ch: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn right_arrow_advances_gallery_and_clamps() {
        let mut app = app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.viewer.current_index(), 4);
        assert!(app.status.message().starts_with("Picture 5/5"));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.viewer.current_index(), 3);
    }

    #[test]
    fn arrows_on_form_screen_edit_fields_not_gallery() {
        let mut app = app();
        chord(&mut app, 'l');
        assert_eq!(app.screen, Screen::Rsvp);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.viewer.current_index(), 0);
        assert_eq!(app.form.choice(FieldId::Attending), Some(Choice::Yes));
    }

    #[test]
    fn full_rsvp_flow_produces_submission() {
        let mut app = app();
        chord(&mut app, 'l');
        type_text(&mut app, "Ada Lovelace");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('y'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('y'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.form.focus(), FieldId::PlusOneName);
        type_text(&mut app, "Charles");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.form.focus(), FieldId::Submit);
        press(&mut app, KeyCode::Enter);

        let submission = app.result.clone().expect("submitted");
        assert_eq!(submission.guest_line(), "Ada Lovelace (+Charles)");
        assert_eq!(app.form.submit_control().label(), "Saving...");

        chord(&mut app, 's');
        assert_eq!(app.status.message(), "Already sent; waiting for the server.");
    }

    #[test]
    fn blocked_submit_reports_missing_fields() {
        let mut app = app();
        chord(&mut app, 'l');
        chord(&mut app, 's');
        assert_eq!(app.status.message(), "Please fill out: Full name, Attending?");
        assert!(app.result.is_none());
        assert!(!app.form.submit_control().is_disabled());
    }

    #[test]
    fn quit_sets_exit_flag() {
        let mut app = app();
        chord(&mut app, 'q');
        assert!(app.should_quit);
    }
}
