// SPDX-License-Identifier: PMPL-1.0-or-later

//! Admin dashboard views.

pub mod filter;
pub mod form;
pub mod notify;
pub mod posters;

pub use filter::{paginate, EbookFilter, Page, PosterFilter, StatusFilter, DEFAULT_PAGE_SIZE};
pub use form::{FieldErrors, ImageUpload, PosterForm};
pub use notify::{Notifier, Toast, ToastKind};
pub use posters::{Confirm, ExportSummary, Modal, PosterAdmin, SubmitOutcome};
