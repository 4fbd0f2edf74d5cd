// SPDX-License-Identifier: PMPL-1.0-or-later

//! Poster admin view: cached list, filters, modal form and toasts.
//!
//! Every mutating operation is fire-and-forget from the view's side: no
//! optimistic update, and on success the whole list is fetched again
//! rather than patched.

use chrono::Utc;
use std::path::{Path, PathBuf};

use super::filter::{paginate, Page, PosterFilter, DEFAULT_PAGE_SIZE};
use super::form::{FieldErrors, PosterForm};
use super::notify::Notifier;
use crate::api::ApiClient;
use crate::i18n::{t, Lang};
use crate::types::{Poster, PosterStats};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Create,
    Edit(String),
}

/// Yes/no prompt guarding destructive operations.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    /// Validation failed; see [`PosterAdmin::field_errors`]. Nothing was sent.
    Invalid,
    /// The server refused or could not be reached; the modal stays open.
    Failed,
    /// No form is open.
    NoModal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

#[derive(Debug)]
pub struct PosterAdmin {
    client: ApiClient,
    lang: Lang,
    posters: Vec<Poster>,
    stats: Option<PosterStats>,
    filter: PosterFilter,
    page: usize,
    page_size: usize,
    modal: Modal,
    field_errors: FieldErrors,
    toasts: Notifier,
}

impl PosterAdmin {
    pub fn new(client: ApiClient, lang: Lang) -> Self {
        Self {
            client,
            lang,
            posters: Vec::new(),
            stats: None,
            filter: PosterFilter::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            modal: Modal::Closed,
            field_errors: FieldErrors::default(),
            toasts: Notifier::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn posters(&self) -> &[Poster] {
        &self.posters
    }

    pub fn stats(&self) -> Option<&PosterStats> {
        self.stats.as_ref()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn toasts(&self) -> &Notifier {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut Notifier {
        &mut self.toasts
    }

    /// Fetch the list and the statistics. Returns whether the list loaded.
    pub async fn refresh(&mut self) -> bool {
        let list = self.client.list_posters().await;
        let stats = self.client.poster_stats().await;

        let loaded = match list {
            Ok(posters) => {
                tracing::debug!(count = posters.len(), "posters loaded");
                self.posters = posters;
                true
            }
            Err(err) => {
                self.toasts.error(err.user_message(self.lang));
                false
            }
        };
        match stats {
            Ok(stats) => self.stats = Some(stats),
            Err(err) => {
                tracing::warn!(error = %err, "poster stats unavailable");
                self.toasts.error(t(self.lang, "poster.stats_failed"));
            }
        }
        loaded
    }

    pub fn filter(&self) -> &PosterFilter {
        &self.filter
    }

    /// Replace the filter and go back to the first page.
    pub fn set_filter(&mut self, filter: PosterFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn visible_page(&self) -> Page<Poster> {
        let filtered: Vec<Poster> = self
            .filter
            .apply(&self.posters)
            .into_iter()
            .cloned()
            .collect();
        paginate(&filtered, self.page, self.page_size)
    }

    pub fn open_create(&mut self) {
        self.field_errors = FieldErrors::default();
        self.modal = Modal::Create;
    }

    /// Open the edit form for a cached poster, returning its prefilled form.
    pub fn open_edit(&mut self, id: &str) -> Option<PosterForm> {
        let Some(poster) = self.posters.iter().find(|p| p.id == id) else {
            self.toasts.error(t(self.lang, "poster.not_found"));
            return None;
        };
        let form = PosterForm::from_poster(poster);
        self.field_errors = FieldErrors::default();
        self.modal = Modal::Edit(id.to_string());
        Some(form)
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
        self.field_errors = FieldErrors::default();
    }

    /// Submit the open form: validate, then POST (create) or PUT (edit).
    pub async fn submit(&mut self, form: &PosterForm) -> SubmitOutcome {
        let editing = match &self.modal {
            Modal::Closed => return SubmitOutcome::NoModal,
            Modal::Create => None,
            Modal::Edit(id) => Some(id.clone()),
        };
        if let Err(errors) = form.validate() {
            tracing::debug!(?errors, "poster form rejected locally");
            self.field_errors = errors;
            return SubmitOutcome::Invalid;
        }
        self.field_errors = FieldErrors::default();

        let result = match &editing {
            None => self.client.create_poster(form).await,
            Some(id) => self.client.update_poster(id, form).await,
        };

        match result {
            Ok(_) => {
                self.modal = Modal::Closed;
                let key = if editing.is_some() {
                    "poster.updated"
                } else {
                    "poster.created"
                };
                self.toasts.success(t(self.lang, key));
                self.refresh().await;
                SubmitOutcome::Saved
            }
            Err(err) => {
                self.toasts.error(err.user_message(self.lang));
                SubmitOutcome::Failed
            }
        }
    }

    pub async fn toggle_status(&mut self, id: &str) -> bool {
        match self.client.toggle_poster(id).await {
            Ok(_) => {
                self.toasts.success(t(self.lang, "poster.toggled"));
                self.refresh().await;
                true
            }
            Err(err) => {
                self.toasts.error(err.user_message(self.lang));
                false
            }
        }
    }

    /// Delete after `confirm` agrees. A declined prompt sends nothing.
    pub async fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> bool {
        if !confirm.confirm(t(self.lang, "poster.confirm_delete")) {
            tracing::debug!(id, "poster delete declined");
            return false;
        }
        match self.client.delete_poster(id).await {
            Ok(_) => {
                self.toasts.success(t(self.lang, "poster.deleted"));
                self.refresh().await;
                true
            }
            Err(err) => {
                self.toasts.error(err.user_message(self.lang));
                false
            }
        }
    }

    /// Download the CSV export into `dir` as `posters-<timestamp>.csv`.
    pub async fn export_csv(&mut self, dir: &Path) -> Option<ExportSummary> {
        let bytes = match self.client.export_posters().await {
            Ok(bytes) => bytes,
            Err(err) => {
                self.toasts.error(err.user_message(self.lang));
                return None;
            }
        };
        let file_name = format!("posters-{}.csv", Utc::now().format("%Y%m%d%H%M%S"));
        let path = dir.join(file_name);
        let written = async {
            tokio::fs::create_dir_all(dir).await?;
            tokio::fs::write(&path, &bytes).await
        };
        if let Err(err) = written.await {
            tracing::warn!(path = %path.display(), error = %err, "could not save poster export");
            self.toasts.error(t(self.lang, "error.generic"));
            return None;
        }
        let rows = count_csv_rows(&bytes);
        tracing::info!(path = %path.display(), rows, "poster export saved");
        self.toasts.success(t(self.lang, "poster.exported"));
        Some(ExportSummary { path, rows })
    }
}

/// Data rows in a CSV blob (header excluded). Honors a UTF-8/UTF-16 BOM.
pub fn count_csv_rows(bytes: &[u8]) -> usize {
    let (text, _, _) = encoding_rs::UTF_8.decode(bytes);
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .count()
        .saturating_sub(1)
}
