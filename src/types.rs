// SPDX-License-Identifier: PMPL-1.0-or-later

//! Entities served by the site API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::LocalizedString;

/// Standard response wrapper: `{ success, data, message }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

/// A promotional poster shown on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poster {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(default, alias = "image_url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, alias = "link_url", skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default, alias = "is_active")]
    pub is_active: bool,
    #[serde(default, alias = "start_date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, alias = "end_date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, alias = "view_count")]
    pub view_count: u64,
    #[serde(default, alias = "click_count")]
    pub click_count: u64,
    #[serde(default, alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Aggregate counters from `/api/posters/stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PosterStats {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
    #[serde(alias = "total_views")]
    pub total_views: u64,
    #[serde(alias = "total_clicks")]
    pub total_clicks: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: LocalizedString,
    #[serde(default, alias = "position")]
    pub role: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<LocalizedString>,
    #[serde(default, alias = "image_url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, alias = "display_order")]
    pub order: i32,
    #[serde(default = "default_active", alias = "is_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ebook {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: LocalizedString,
    #[serde(default)]
    pub author: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "cover_image_url", skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, alias = "file_url", skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, alias = "download_count")]
    pub download_count: u64,
    #[serde(default = "default_active", alias = "is_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poster_accepts_mongo_and_snake_case_fields() {
        let poster: Poster = serde_json::from_str(
            r#"{
                "_id": "p1",
                "title": { "en": "Pongal", "ta": "பொங்கல்" },
                "priority": 2,
                "is_active": true,
                "startDate": "2025-01-10T00:00:00.000Z",
                "view_count": 12
            }"#,
        )
        .unwrap();
        assert_eq!(poster.id, "p1");
        assert!(poster.is_active);
        assert_eq!(poster.view_count, 12);
        assert!(poster.start_date.is_some());
        assert!(poster.description.is_none());
    }

    #[test]
    fn envelope_defaults_to_success() {
        let env: Envelope<PosterStats> = serde_json::from_str(r#"{ "data": { "total": 3 } }"#).unwrap();
        assert!(env.success);
        assert_eq!(env.data.unwrap().total, 3);
    }

    #[test]
    fn team_member_defaults_active() {
        let member: TeamMember =
            serde_json::from_str(r#"{ "id": "t1", "name": "Kavitha", "role": "Editor" }"#).unwrap();
        assert!(member.is_active);
        assert_eq!(member.role.en, "Editor");
    }
}
