//! Image catalog types

use crate::GalleryError;

/// A single gallery image: an asset path plus its accessible description
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageEntry {
    /// Asset path, resolved by the host page (e.g. `/gallery/gallery-bar.webp`)
    pub source: String,
    /// Alt text
    pub label: String,
}

impl ImageEntry {
    pub fn new(source: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            label: label.into(),
        }
    }
}

/// Ordered, non-empty list of gallery images.
///
/// Index arithmetic in [`crate::Viewer`] relies on `len() > 0`, so the only
/// way to build one is through [`ImageSet::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSet {
    entries: Vec<ImageEntry>,
}

impl ImageSet {
    pub fn new(entries: Vec<ImageEntry>) -> Result<Self, GalleryError> {
        if entries.is_empty() {
            return Err(GalleryError::EmptyImageSet);
        }
        Ok(Self { entries })
    }

    /// Build from `(source, label)` pairs, e.g. a `const` table.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, GalleryError> {
        Self::new(
            pairs
                .iter()
                .map(|(source, label)| ImageEntry::new(*source, *label))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; present for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_rejected() {
        assert_eq!(ImageSet::new(vec![]), Err(GalleryError::EmptyImageSet));
        assert_eq!(ImageSet::from_pairs(&[]), Err(GalleryError::EmptyImageSet));
    }

    #[test]
    fn test_from_pairs_preserves_order() {
        let set = ImageSet::from_pairs(&[("/a.webp", "A"), ("/b.webp", "B")]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.get(0), Some(&ImageEntry::new("/a.webp", "A")));
        assert_eq!(set.get(1).map(|e| e.label.as_str()), Some("B"));
        assert_eq!(set.get(2), None);
    }

    #[test]
    fn test_duplicate_sources_allowed() {
        let set = ImageSet::from_pairs(&[("/a.webp", "First"), ("/a.webp", "Second")]).unwrap();
        let labels: Vec<_> = set.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["First", "Second"]);
    }
}
