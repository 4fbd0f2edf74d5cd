// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console rendering of listings

use colored::*;

use crate::admin::{Page, Toast, ToastKind};
use crate::i18n::{t, Lang, LocalizedString};
use crate::theme::ThemePalette;
use crate::types::{Ebook, Poster, PosterStats, TeamMember};

/// Renders listings in the reader's language.
pub struct ListingFormatter {
    lang: Lang,
}

impl ListingFormatter {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    fn text<'a>(&self, value: &'a LocalizedString) -> &'a str {
        value.get(self.lang).unwrap_or("-")
    }

    fn status(&self, active: bool) -> ColoredString {
        if active {
            t(self.lang, "label.active").green()
        } else {
            t(self.lang, "label.inactive").red()
        }
    }

    fn footer<T>(&self, page: &Page<T>) {
        println!(
            "\n  {} {} {} {} ({} total)",
            t(self.lang, "label.page"),
            page.page,
            t(self.lang, "label.of"),
            page.total_pages,
            page.total_items
        );
    }

    pub fn print_posters(&self, page: &Page<Poster>) {
        println!("{}", "POSTERS".bold().yellow());
        if page.items.is_empty() {
            println!("  {}", t(self.lang, "page.empty").dimmed());
        }
        for poster in &page.items {
            println!(
                "  {} [{}] {} {}",
                poster.id.dimmed(),
                self.status(poster.is_active),
                self.text(&poster.title).bold(),
                format!("(priority {})", poster.priority).dimmed()
            );
            if let Some(description) = poster.description.as_ref().and_then(|d| d.get(self.lang)) {
                println!("      {}", description);
            }
            let window = match (poster.start_date, poster.end_date) {
                (None, None) => None,
                (start, end) => Some(format!(
                    "{} -> {}",
                    start.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
                    end.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
                )),
            };
            if let Some(window) = window {
                println!("      {}", window.dimmed());
            }
        }
        self.footer(page);
    }

    pub fn print_poster(&self, poster: &Poster) {
        println!("{}", self.text(&poster.title).bold().cyan());
        println!("  id:        {}", poster.id);
        println!("  status:    {}", self.status(poster.is_active));
        println!("  priority:  {}", poster.priority);
        if let Some(ta) = poster.title.ta.as_deref() {
            println!("  title.ta:  {}", ta);
        }
        if let Some(description) = &poster.description {
            println!("  summary:   {}", self.text(description));
        }
        if let Some(image) = &poster.image_url {
            println!("  image:     {}", image);
        }
        if let Some(link) = &poster.link_url {
            println!("  link:      {}", link);
        }
        println!("  views:     {}", poster.view_count);
        println!("  clicks:    {}", poster.click_count);
    }

    pub fn print_stats(&self, stats: &PosterStats) {
        println!("{}", "POSTER STATISTICS".bold().yellow());
        println!("  Total:     {}", stats.total);
        println!("  Active:    {}", stats.active.to_string().green());
        println!("  Inactive:  {}", stats.inactive.to_string().red());
        println!("  Views:     {}", stats.total_views);
        println!("  Clicks:    {}", stats.total_clicks);
    }

    pub fn print_team(&self, members: &[TeamMember]) {
        println!("{}", "TEAM".bold().yellow());
        if members.is_empty() {
            println!("  {}", t(self.lang, "page.empty").dimmed());
        }
        for member in members {
            println!(
                "  {} - {}",
                self.text(&member.name).bold(),
                self.text(&member.role)
            );
        }
    }

    pub fn print_ebooks(&self, page: &Page<Ebook>) {
        println!("{}", "EBOOKS".bold().yellow());
        if page.items.is_empty() {
            println!("  {}", t(self.lang, "page.empty").dimmed());
        }
        for ebook in &page.items {
            println!(
                "  {} / {} {}",
                self.text(&ebook.title).bold(),
                self.text(&ebook.author),
                format!("[{}]", ebook.category).dimmed()
            );
        }
        self.footer(page);
    }

    pub fn print_palette(&self, palette: &ThemePalette) {
        println!("{} {}", "THEME".bold().yellow(), palette.name.to_string().bold());
        for (name, value) in palette.tokens() {
            println!("  {:24} {}", name, value);
        }
    }

    pub fn print_toasts(&self, toasts: &[Toast]) {
        for toast in toasts {
            let tag = match toast.kind {
                ToastKind::Success => "OK".green(),
                ToastKind::Error => "ERR".red(),
            };
            println!("[{}] {}", tag, toast.message);
        }
    }
}
