//! Blog navigation state
//!
//! Tracks the document currently on screen and the table of contents that
//! accumulates while its headings render.

use serde::{Deserialize, Serialize};

/// A heading entry in the table of contents
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    pub title: String,
    pub slug: String,
}

impl TocItem {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
        }
    }
}

/// Navigation state for the displayed blog document
#[derive(Clone, Debug, Default, Serialize)]
pub struct BlogNavState {
    title: String,
    slug: String,
    table_of_contents: Vec<TocItem>,
}

impl BlogNavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
    }

    /// Headings in render order
    pub fn table_of_contents(&self) -> &[TocItem] {
        &self.table_of_contents
    }

    /// Append a heading unless one with the same title is already listed
    ///
    /// Returns `true` if the item was inserted.
    pub fn add_toc_item(&mut self, item: TocItem) -> bool {
        if self
            .table_of_contents
            .iter()
            .any(|existing| existing.title == item.title)
        {
            tracing::trace!("BlogNavState: skipping duplicate heading {:?}", item.title);
            return false;
        }
        self.table_of_contents.push(item);
        true
    }

    pub fn reset_table_of_contents(&mut self) {
        self.table_of_contents.clear();
    }

    /// Start rendering a new document
    ///
    /// Clears the previous document's headings before the new scalars are
    /// set, so accumulation always starts from an empty sequence.
    pub fn begin_document(&mut self, title: impl Into<String>, slug: impl Into<String>) {
        self.reset_table_of_contents();
        self.set_title(title);
        self.set_slug(slug);
        tracing::debug!("BlogNavState: begin document {:?}", self.slug);
    }
}
