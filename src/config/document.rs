use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use super::{DocumentFormat, SiteConfig};

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::from_str::<toml::Table>(contents)
            .with_context(|| "failed to parse TOML document")
            .and_then(|table| {
                serde_json::to_value(table).context("failed to convert TOML to JSON")
            }),
    }
}

/// Parse, validate and deserialize a site configuration document.
pub fn load_site_config(contents: &str, format: DocumentFormat) -> Result<SiteConfig> {
    let value = parse_document_str(contents, format)?;
    let config = SiteConfig::from_value(&value)?;
    info!(
        pictures = config.gallery.pictures.len(),
        variant = config.rsvp.variant.as_str(),
        "site configuration loaded"
    );
    Ok(config)
}
