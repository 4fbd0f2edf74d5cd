// SPDX-License-Identifier: PMPL-1.0-or-later

//! Client-side filtering and pagination of fetched collections.

use serde::Serialize;
use std::str::FromStr;

use crate::types::{Ebook, Poster};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(self, is_active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => is_active,
            StatusFilter::Inactive => !is_active,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "inactive" => Ok(StatusFilter::Inactive),
            other => Err(format!("unknown status '{other}' (all, active, inactive)")),
        }
    }
}

/// Poster list filter: bilingual text search, status, exact priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PosterFilter {
    pub search: String,
    pub status: StatusFilter,
    pub priority: Option<i32>,
}

impl PosterFilter {
    pub fn matches(&self, poster: &Poster) -> bool {
        if !self.status.matches(poster.is_active) {
            return false;
        }
        if self.priority.is_some_and(|p| p != poster.priority) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || poster.title.contains_ci(&needle)
            || poster
                .description
                .as_ref()
                .is_some_and(|d| d.contains_ci(&needle))
    }

    pub fn apply<'a>(&self, posters: &'a [Poster]) -> Vec<&'a Poster> {
        posters.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Ebook filter: search over title, author and description; exact
/// (case-insensitive) category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EbookFilter {
    pub search: String,
    pub category: Option<String>,
}

impl EbookFilter {
    pub fn matches(&self, ebook: &Ebook) -> bool {
        if let Some(category) = &self.category {
            if !ebook.category.eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || ebook.title.contains_ci(&needle)
            || ebook.author.contains_ci(&needle)
            || ebook
                .description
                .as_ref()
                .is_some_and(|d| d.contains_ci(&needle))
    }

    pub fn apply<'a>(&self, ebooks: &'a [Ebook]) -> Vec<&'a Ebook> {
        ebooks.iter().filter(|e| self.matches(e)).collect()
    }
}

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed.
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    /// At least 1, so an empty collection still has a (blank) first page.
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Page `page` (1-indexed) of `items`: indices
/// `[(page-1)*page_size, min(page*page_size, n))`.
///
/// Page 0 is read as page 1 and a zero page size as 1. Pages past the end
/// are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let start = (page - 1).saturating_mul(page_size).min(total_items);
    let end = page.saturating_mul(page_size).min(total_items);
    Page {
        items: items[start..end].to_vec(),
        page,
        page_size,
        total_items,
        total_pages,
    }
}
