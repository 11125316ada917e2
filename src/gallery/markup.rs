use std::fmt;

/// Where rendered images go and how their `<img>` tag looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupStyle {
    pub container_id: String,
    pub base_path: String,
    pub image_class: String,
}

impl Default for MarkupStyle {
    fn default() -> Self {
        Self {
            container_id: "currentImage".to_string(),
            base_path: "/static/pictures".to_string(),
            image_class: "img-fluid".to_string(),
        }
    }
}

impl MarkupStyle {
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    pub fn with_image_class(mut self, image_class: impl Into<String>) -> Self {
        self.image_class = image_class.into();
        self
    }
}

/// One rendered image, ready to be written into its container.
///
/// Filenames are literal constants of the site, so they are inserted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMarkup {
    index: usize,
    filename: String,
    src: String,
    class: String,
    container_id: String,
}

impl ImageMarkup {
    pub(crate) fn new(index: usize, filename: &str, style: &MarkupStyle) -> Self {
        let base = style.base_path.trim_end_matches('/');
        Self {
            index,
            filename: filename.to_string(),
            src: format!("{base}/{filename}"),
            class: style.image_class.clone(),
            container_id: style.container_id.clone(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ImageMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<img class=\"{}\" src=\"{}\">", self.class, self.src)
    }
}
