// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site copy and public listings: content dictionary, team, ebooks,
//! newsletter.

use reqwest::Method;
use serde::Serialize;
use std::sync::OnceLock;

use super::client::ApiClient;
use super::error::{ApiError, Result};
use crate::i18n::{ContentDictionary, Lang, SiteContent};
use crate::types::{Ebook, TeamMember};

const CONTENT_PATH: &str = "/api/website-content/global";
const TEAM_PATH: &str = "/api/team";
const EBOOKS_PATH: &str = "/api/ebooks";
const NEWSLETTER_PATH: &str = "/api/newsletter/subscribe";

#[derive(Serialize)]
struct Subscription<'a> {
    email: &'a str,
    language: Lang,
}

impl ApiClient {
    pub async fn global_content(&self, lang: Lang) -> Result<ContentDictionary> {
        let request = self
            .request(Method::GET, CONTENT_PATH)
            .query(&[("language", lang.code())]);
        self.send_data(request).await
    }

    pub async fn team(&self, lang: Lang) -> Result<Vec<TeamMember>> {
        let request = self
            .request(Method::GET, TEAM_PATH)
            .query(&[("language", lang.code())]);
        self.send_data(request).await
    }

    pub async fn ebooks(&self, lang: Lang) -> Result<Vec<Ebook>> {
        let request = self
            .request(Method::GET, EBOOKS_PATH)
            .query(&[("language", lang.code())]);
        self.send_data(request).await
    }

    /// Subscribe `email` to the newsletter. The address is checked locally
    /// first; a malformed one never reaches the server.
    pub async fn subscribe_newsletter(&self, email: &str, lang: Lang) -> Result<Option<String>> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(ApiError::Invalid {
                field: "email",
                message_key: "validation.email",
            });
        }
        let request = self
            .request(Method::POST, NEWSLETTER_PATH)
            .json(&Subscription {
                email,
                language: lang,
            });
        self.send_ack(request).await
    }
}

impl SiteContent {
    /// Fetch the dictionary for `lang` and swap it in. On failure the
    /// previous dictionary stays in place.
    pub async fn load(&mut self, client: &ApiClient, lang: Lang) -> Result<()> {
        let dictionary = client.global_content(lang).await?;
        self.replace(lang, dictionary);
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<regex::Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
        })
        .is_match(email)
}
