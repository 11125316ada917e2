mod document;
mod format;
mod output;
mod site;

pub use document::{load_site_config, parse_document_str};
pub use format::DocumentFormat;
pub use output::{OutputDestination, OutputOptions, emit, serialize_submission};
pub use site::{ConfigError, GalleryConfig, RsvpConfig, SiteConfig, site_config_schema};
