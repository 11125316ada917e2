use jsonschema::validator_for;
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{
    gallery::{DEFAULT_PICTURES, GalleryError, ImageList, ImageViewer, MarkupStyle},
    rsvp::{DEFAULT_PENDING_LABEL, FormVariant, SubmitControl, dom::DEFAULT_FORM_ID},
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to compile configuration schema: {0}")]
    Schema(String),
    #[error("invalid site configuration:\n{}", .0.join("\n"))]
    Invalid(Vec<String>),
    #[error("failed to deserialize site configuration: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error(transparent)]
    Gallery(#[from] GalleryError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Heading shown above both screens.
    pub title: String,
    pub gallery: GalleryConfig,
    pub rsvp: RsvpConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "RSVP".to_string(),
            gallery: GalleryConfig::default(),
            rsvp: RsvpConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Picture filenames, in display order.
    #[schemars(length(min = 1))]
    pub pictures: Vec<String>,
    /// URL prefix the filenames are served under.
    pub base_path: String,
    pub container_id: String,
    pub image_class: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let style = MarkupStyle::default();
        Self {
            pictures: DEFAULT_PICTURES.iter().map(|name| name.to_string()).collect(),
            base_path: style.base_path,
            container_id: style.container_id,
            image_class: style.image_class,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct RsvpConfig {
    pub form_id: String,
    pub variant: FormVariant,
    pub submit_label: String,
    /// Label the submit button switches to once pressed.
    pub pending_label: String,
}

impl Default for RsvpConfig {
    fn default() -> Self {
        let control = SubmitControl::default();
        Self {
            form_id: DEFAULT_FORM_ID.to_string(),
            variant: FormVariant::default(),
            submit_label: control.label().to_string(),
            pending_label: DEFAULT_PENDING_LABEL.to_string(),
        }
    }
}

/// JSON Schema every configuration document is checked against.
pub fn site_config_schema() -> Value {
    serde_json::to_value(schema_for!(SiteConfig)).unwrap_or(Value::Bool(true))
}

impl SiteConfig {
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let schema = site_config_schema();
        let validator =
            validator_for(&schema).map_err(|err| ConfigError::Schema(err.to_string()))?;
        let issues = validator
            .iter_errors(value)
            .map(|error| {
                let path = error.instance_path.to_string();
                if path.is_empty() {
                    error.to_string()
                } else {
                    format!("{path}: {error}")
                }
            })
            .collect::<Vec<_>>();
        if !issues.is_empty() {
            return Err(ConfigError::Invalid(issues));
        }
        let config: SiteConfig = serde_json::from_value(value.clone())?;
        config.image_list()?;
        Ok(config)
    }

    pub fn image_list(&self) -> Result<ImageList, GalleryError> {
        ImageList::new(self.gallery.pictures.iter().cloned())
    }

    pub fn markup_style(&self) -> MarkupStyle {
        MarkupStyle::default()
            .with_base_path(self.gallery.base_path.clone())
            .with_container_id(self.gallery.container_id.clone())
            .with_image_class(self.gallery.image_class.clone())
    }

    pub fn image_viewer(&self) -> Result<ImageViewer, GalleryError> {
        Ok(ImageViewer::with_style(self.image_list()?, self.markup_style()))
    }

    pub fn submit_control(&self) -> SubmitControl {
        SubmitControl::new(self.rsvp.submit_label.clone(), self.rsvp.pending_label.clone())
    }

    pub fn with_variant(mut self, variant: FormVariant) -> Self {
        self.rsvp.variant = variant;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
