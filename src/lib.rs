#![deny(rust_2018_idioms)]

mod app;
pub mod config;
pub mod form;
pub mod gallery;
mod presentation;
pub mod rsvp;

pub use app::{KeyAction, KeymapContext, KeymapStore, Kiosk, UiOptions};
pub use config::{
    ConfigError, DocumentFormat, OutputDestination, OutputOptions, SiteConfig, emit,
    load_site_config, parse_document_str, site_config_schema,
};
pub use gallery::{ImageList, ImageMarkup, ImageViewer, Navigation};
pub use rsvp::{Choice, FieldFlags, FormVariant, RsvpStore, RsvpSubmission, derive_flags};

pub mod prelude {
    pub use super::{
        Choice, FieldFlags, FormVariant, ImageList, ImageViewer, Kiosk, RsvpStore, SiteConfig,
        UiOptions,
    };
}
