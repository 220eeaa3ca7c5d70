// SPDX-License-Identifier: MPL-2.0
//! Gallery items shown as polaroid cards and in the lightbox.
//!
//! The collection is fixed once the invitation content is loaded. Cloning a
//! [`Gallery`] is cheap, so the page and the lightbox share the same items.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One photo of the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    source: PathBuf,
    caption: Option<String>,
}

impl GalleryItem {
    /// Creates an item. Blank captions are treated as absent.
    pub fn new(source: impl Into<PathBuf>, caption: Option<String>) -> Self {
        Self {
            source: source.into(),
            caption: caption.filter(|text| !text.trim().is_empty()),
        }
    }

    /// Path of the image file.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

/// Ordered, read-only collection of gallery items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gallery {
    items: Arc<[GalleryItem]>,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }
}

impl FromIterator<GalleryItem> for Gallery {
    fn from_iter<I: IntoIterator<Item = GalleryItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
