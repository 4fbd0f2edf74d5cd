// SPDX-License-Identifier: PMPL-1.0-or-later

//! Toast notifications raised by admin operations.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Pending toasts, oldest first.
#[derive(Debug, Default)]
pub struct Notifier {
    queue: Vec<Toast>,
}

impl Notifier {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        match kind {
            ToastKind::Error => tracing::warn!(%message, "toast"),
            ToastKind::Success => tracing::info!(%message, "toast"),
        }
        self.queue.push(Toast { kind, message });
    }

    pub fn pending(&self) -> &[Toast] {
        &self.queue
    }

    pub fn last(&self) -> Option<&Toast> {
        self.queue.last()
    }

    /// Take every pending toast.
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.queue)
    }
}
