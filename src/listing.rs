// SPDX-License-Identifier: PMPL-1.0-or-later

//! Public read views: the team page and the ebook shelf.

use crate::admin::filter::{paginate, EbookFilter, Page, DEFAULT_PAGE_SIZE};
use crate::api::{ApiClient, Result};
use crate::i18n::Lang;
use crate::types::{Ebook, TeamMember};

/// Team page order: active members only, by display order then English name.
pub fn arrange_team(mut members: Vec<TeamMember>) -> Vec<TeamMember> {
    members.retain(|m| m.is_active);
    members.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.en.cmp(&b.name.en)));
    members
}

pub async fn load_team(client: &ApiClient, lang: Lang) -> Result<Vec<TeamMember>> {
    Ok(arrange_team(client.team(lang).await?))
}

/// The ebook library page.
#[derive(Debug, Clone, Default)]
pub struct EbookShelf {
    ebooks: Vec<Ebook>,
    filter: EbookFilter,
    page: usize,
    page_size: usize,
}

impl EbookShelf {
    pub fn new(ebooks: Vec<Ebook>) -> Self {
        Self {
            ebooks: ebooks.into_iter().filter(|e| e.is_active).collect(),
            filter: EbookFilter::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub async fn load(client: &ApiClient, lang: Lang) -> Result<Self> {
        Ok(Self::new(client.ebooks(lang).await?))
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn set_filter(&mut self, filter: EbookFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Distinct categories, sorted, for the category picker.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .ebooks
            .iter()
            .map(|e| e.category.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    pub fn visible_page(&self) -> Page<Ebook> {
        let filtered: Vec<Ebook> = self
            .filter
            .apply(&self.ebooks)
            .into_iter()
            .cloned()
            .collect();
        paginate(&filtered, self.page, self.page_size)
    }
}
