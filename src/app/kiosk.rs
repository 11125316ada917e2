use anyhow::{Context, Result};

use crate::{
    config::{OutputOptions, SiteConfig, emit},
    form::FormState,
    rsvp::RsvpSubmission,
};

use super::{options::UiOptions, runtime::App};

/// Entry point: the gallery and RSVP screens for one site configuration.
#[derive(Debug)]
pub struct Kiosk {
    config: SiteConfig,
    options: UiOptions,
    output: Option<OutputOptions>,
}

impl Kiosk {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            options: UiOptions::default(),
            output: None,
        }
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = Some(output);
        self
    }

    /// Run until the user quits; returns the RSVP if one was sent.
    pub fn run(self) -> Result<Option<RsvpSubmission>> {
        let Kiosk {
            config,
            options,
            output,
        } = self;

        let viewer = config
            .image_viewer()
            .context("failed to build image viewer")?;
        let form = FormState::new(config.rsvp.variant, config.submit_control());

        let mut app = App::new(config.title, viewer, form, options);
        let submission = app.run()?;

        if let (Some(submission), Some(output)) = (submission.as_ref(), output.as_ref()) {
            emit(submission, output)?;
        }
        Ok(submission)
    }
}
