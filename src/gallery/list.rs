use std::slice::Iter;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("picture list cannot be empty")]
    Empty,
}

/// Ordered, fixed list of picture filenames. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageList {
    filenames: Vec<String>,
}

impl ImageList {
    pub fn new<I, S>(filenames: I) -> Result<Self, GalleryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let filenames = filenames.into_iter().map(Into::into).collect::<Vec<_>>();
        if filenames.is_empty() {
            return Err(GalleryError::Empty);
        }
        Ok(Self { filenames })
    }

    pub fn len(&self) -> usize {
        self.filenames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filenames.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.filenames.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.filenames.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String> {
        self.filenames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_lists() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(ImageList::new(empty), Err(GalleryError::Empty));
    }

    #[test]
    fn keeps_insertion_order() {
        let list = ImageList::new(["b.jpg", "a.jpg"]).unwrap();
        assert_eq!(list.get(0), Some("b.jpg"));
        assert_eq!(list.get(1), Some("a.jpg"));
        assert_eq!(list.get(2), None);
        assert_eq!(list.last_index(), 1);
    }
}
