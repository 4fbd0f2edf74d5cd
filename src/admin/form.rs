// SPDX-License-Identifier: PMPL-1.0-or-later

//! The "Add/Edit Poster" form: validation and multipart encoding.

use chrono::NaiveDate;
use reqwest::multipart::{Form, Part};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::api::ApiError;
use crate::i18n::{t, Lang};
use crate::types::Poster;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
pub const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "image/gif"];
pub const PRIORITY_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

/// An image attached to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Read an image from disk, guessing its MIME type from the extension.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        let mime = mime_for(path).to_string();
        Ok(Self {
            file_name,
            mime,
            bytes,
        })
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Per-field validation failures, as catalog message keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    fn insert(&mut self, field: &'static str, message_key: &'static str) {
        self.0.entry(field).or_insert(message_key);
    }

    /// `(field, localized message)` pairs in field order.
    pub fn messages(&self, lang: Lang) -> Vec<(&'static str, &'static str)> {
        self.0
            .iter()
            .map(|(field, key)| (*field, t(lang, key)))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PosterForm {
    pub title_en: String,
    pub title_ta: String,
    pub description_en: String,
    pub description_ta: String,
    pub link_url: String,
    pub priority: i32,
    pub is_active: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub image: Option<ImageUpload>,
}

impl PosterForm {
    /// A fresh, active poster with both titles filled in.
    pub fn new(title_en: impl Into<String>, title_ta: impl Into<String>) -> Self {
        Self {
            title_en: title_en.into(),
            title_ta: title_ta.into(),
            is_active: true,
            ..Self::default()
        }
    }

    /// Prefill for editing. The image is left empty: leaving it out keeps
    /// the stored one.
    pub fn from_poster(poster: &Poster) -> Self {
        let description = poster.description.clone().unwrap_or_default();
        Self {
            title_en: poster.title.en.clone(),
            title_ta: poster.title.ta.clone().unwrap_or_default(),
            description_en: description.en,
            description_ta: description.ta.unwrap_or_default(),
            link_url: poster.link_url.clone().unwrap_or_default(),
            priority: poster.priority,
            is_active: poster.is_active,
            start_date: poster.start_date.map(|d| d.date_naive()),
            end_date: poster.end_date.map(|d| d.date_naive()),
            image: None,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.title_en.trim().is_empty() {
            errors.insert("title.en", "validation.title_en_required");
        }
        if self.title_ta.trim().is_empty() {
            errors.insert("title.ta", "validation.title_ta_required");
        }
        if !PRIORITY_RANGE.contains(&self.priority) {
            errors.insert("priority", "validation.priority_range");
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                errors.insert("end_date", "validation.date_order");
            }
        }
        if let Some(image) = &self.image {
            if !IMAGE_TYPES.contains(&image.mime.as_str()) {
                errors.insert("image", "validation.image_type");
            } else if image.bytes.len() > MAX_IMAGE_BYTES {
                errors.insert("image", "validation.image_size");
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Text fields in submission order. Empty optional fields are left out.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title.en", self.title_en.trim().to_string()),
            ("title.ta", self.title_ta.trim().to_string()),
        ];
        let optional = [
            ("description.en", self.description_en.trim()),
            ("description.ta", self.description_ta.trim()),
            ("link_url", self.link_url.trim()),
        ];
        fields.extend(
            optional
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(name, value)| (name, value.to_string())),
        );
        fields.push(("priority", self.priority.to_string()));
        fields.push(("is_active", self.is_active.to_string()));
        if let Some(start) = self.start_date {
            fields.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            fields.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }
        fields
    }

    pub fn to_multipart(&self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in self.fields() {
            form = form.text(name, value);
        }
        if let Some(image) = &self.image {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.mime)
                .map_err(|err| ApiError::Request(err.to_string()))?;
            form = form.part("image", part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_form_fields() {
        let mut form = PosterForm::new("Test", "டெஸ்ட்");
        form.priority = 1;
        assert_eq!(
            form.fields(),
            vec![
                ("title.en", "Test".to_string()),
                ("title.ta", "டெஸ்ட்".to_string()),
                ("priority", "1".to_string()),
                ("is_active", "true".to_string()),
            ]
        );
        assert!(form.validate().is_ok());
    }

    #[test]
    fn validation_collects_every_field() {
        let form = PosterForm {
            priority: 250,
            start_date: NaiveDate::from_ymd_opt(2025, 3, 10),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            image: Some(ImageUpload {
                file_name: "poster.bmp".into(),
                mime: "image/bmp".into(),
                bytes: vec![0; 10],
            }),
            ..PosterForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("title.en"), Some("validation.title_en_required"));
        assert_eq!(errors.get("title.ta"), Some("validation.title_ta_required"));
        assert_eq!(errors.get("priority"), Some("validation.priority_range"));
        assert_eq!(errors.get("end_date"), Some("validation.date_order"));
        assert_eq!(errors.get("image"), Some("validation.image_type"));
        assert_eq!(errors.messages(Lang::Ta).len(), 5);
    }

    #[test]
    fn oversized_image_rejected() {
        let mut form = PosterForm::new("Test", "டெஸ்ட்");
        form.image = Some(ImageUpload {
            file_name: "big.png".into(),
            mime: "image/png".into(),
            bytes: vec![0; MAX_IMAGE_BYTES + 1],
        });
        assert_eq!(
            form.validate().unwrap_err().get("image"),
            Some("validation.image_size")
        );
    }

    #[test]
    fn mime_from_extension() {
        assert_eq!(mime_for(Path::new("a/B.JPG")), "image/jpeg");
        assert_eq!(mime_for(Path::new("poster.webp")), "image/webp");
        assert_eq!(mime_for(Path::new("notes.txt")), "application/octet-stream");
    }
}
