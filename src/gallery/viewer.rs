use tracing::debug;

use super::{ImageList, ImageMarkup, MarkupStyle};

const KEY_CODE_LEFT: u32 = 37;
const KEY_CODE_RIGHT: u32 = 39;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
}

impl Navigation {
    /// Map a DOM `keyCode`. Only the horizontal arrows are recognised.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            KEY_CODE_RIGHT => Some(Navigation::Next),
            KEY_CODE_LEFT => Some(Navigation::Previous),
            _ => None,
        }
    }

    pub fn from_delta(delta: i32) -> Option<Self> {
        match delta.signum() {
            1 => Some(Navigation::Next),
            -1 => Some(Navigation::Previous),
            _ => None,
        }
    }
}

/// Carousel over an [`ImageList`]; the index is clamped, never wrapped.
#[derive(Debug, Clone)]
pub struct ImageViewer {
    images: ImageList,
    style: MarkupStyle,
    current: usize,
}

impl ImageViewer {
    pub fn new(images: ImageList) -> Self {
        Self::with_style(images, MarkupStyle::default())
    }

    pub fn with_style(images: ImageList, style: MarkupStyle) -> Self {
        Self {
            images,
            style,
            current: 0,
        }
    }

    pub fn images(&self) -> &ImageList {
        &self.images
    }

    pub fn style(&self) -> &MarkupStyle {
        &self.style
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Render the image at `index`. Callers clamp; out-of-range yields `None`.
    pub fn display(&self, index: usize) -> Option<ImageMarkup> {
        self.images
            .get(index)
            .map(|filename| ImageMarkup::new(index, filename, &self.style))
    }

    pub fn current(&self) -> ImageMarkup {
        // current is kept within [0, last_index] and the list is never empty
        let filename = self.images.get(self.current).unwrap_or_default();
        ImageMarkup::new(self.current, filename, &self.style)
    }

    pub fn advance(&mut self) -> ImageMarkup {
        self.navigate(Navigation::Next)
    }

    pub fn retreat(&mut self) -> ImageMarkup {
        self.navigate(Navigation::Previous)
    }

    pub fn navigate(&mut self, navigation: Navigation) -> ImageMarkup {
        let previous = self.current;
        self.current = match navigation {
            Navigation::Next => (self.current + 1).min(self.images.last_index()),
            Navigation::Previous => self.current.saturating_sub(1),
        };
        debug!(
            ?navigation,
            from = previous,
            to = self.current,
            "gallery index updated"
        );
        self.current()
    }

    /// Apply a DOM key code; unrecognised codes are ignored.
    pub fn handle_key_code(&mut self, code: u32) -> Option<ImageMarkup> {
        Navigation::from_key_code(code).map(|navigation| self.navigate(navigation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer(count: usize) -> ImageViewer {
        let names = (0..count).map(|idx| format!("{idx}.jpg"));
        ImageViewer::new(ImageList::new(names).unwrap())
    }

    #[test]
    fn starts_at_first_image() {
        let viewer = viewer(3);
        assert_eq!(viewer.current_index(), 0);
        assert_eq!(viewer.current().filename(), "0.jpg");
    }

    #[test]
    fn display_renders_exactly_the_requested_filename() {
        let viewer = viewer(5);
        for idx in 0..5 {
            let markup = viewer.display(idx).unwrap();
            assert_eq!(markup.filename(), format!("{idx}.jpg"));
            assert!(markup.html().contains(&format!("/{idx}.jpg\"")));
            for other in (0..5).filter(|other| *other != idx) {
                assert!(!markup.html().contains(&format!("/{other}.jpg")));
            }
        }
        assert!(viewer.display(5).is_none());
    }

    #[test]
    fn retreat_at_start_stays_at_zero() {
        let mut viewer = viewer(5);
        assert_eq!(viewer.retreat().index(), 0);
        assert_eq!(viewer.current_index(), 0);
    }

    #[test]
    fn ten_advances_over_five_images_stop_at_last() {
        let mut viewer = viewer(5);
        for _ in 0..10 {
            viewer.advance();
        }
        assert_eq!(viewer.current_index(), 4);
        assert_eq!(viewer.advance().index(), 4);
    }

    #[test]
    fn key_codes_drive_navigation() {
        let mut viewer = viewer(3);
        assert_eq!(viewer.handle_key_code(39).map(|m| m.index()), Some(1));
        assert_eq!(viewer.handle_key_code(37).map(|m| m.index()), Some(0));
        assert!(viewer.handle_key_code(38).is_none());
        assert!(viewer.handle_key_code(13).is_none());
        assert_eq!(viewer.current_index(), 0);
    }

    #[test]
    fn single_image_list_never_moves() {
        let mut viewer = viewer(1);
        viewer.advance();
        viewer.retreat();
        assert_eq!(viewer.current_index(), 0);
    }

    #[test]
    fn delta_sign_picks_direction() {
        assert_eq!(Navigation::from_delta(3), Some(Navigation::Next));
        assert_eq!(Navigation::from_delta(-1), Some(Navigation::Previous));
        assert_eq!(Navigation::from_delta(0), None);
    }
}
