// SPDX-License-Identifier: PMPL-1.0-or-later

//! tamil-site: command-line client for the bilingual community site
//!
//! Reads site content and public listings, manages the reader's language and
//! theme preferences, and drives poster administration against the REST API.

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use tamil_site::admin::{
    EbookFilter, ImageUpload, PosterAdmin, PosterFilter, PosterForm, StatusFilter, SubmitOutcome,
};
use tamil_site::api::ApiClient;
use tamil_site::config::{self, SiteConfig, CONFIG_ENV};
use tamil_site::diagnostics;
use tamil_site::i18n::{t, Lang, SiteContent};
use tamil_site::language::LanguageStore;
use tamil_site::listing::{load_team, EbookShelf};
use tamil_site::report::{ListingFormatter, OutputFormat};
use tamil_site::storage::{FileStore, PreferenceStore, TOKEN_KEY};
use tamil_site::theme::{
    platform_preference, CssFileSink, DetachedSink, StyleSink, ThemeName, ThemeStore, Transition,
};

#[derive(Parser)]
#[command(name = "tamil-site")]
#[command(version)]
#[command(about = "Bilingual (English/Tamil) community site client")]
#[command(long_about = None)]
struct Cli {
    /// Config file (default: $TAMIL_SITE_CONFIG or the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Debug logging (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Server-managed page content
    Content {
        #[command(subcommand)]
        action: ContentCommand,
    },

    /// Reader language preference
    Lang {
        #[command(subcommand)]
        action: LangCommand,
    },

    /// Light/dark theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,
    },

    /// Poster administration (needs an admin token)
    Posters {
        #[command(subcommand)]
        action: PosterCommand,
    },

    /// Team page
    Team {
        #[command(subcommand)]
        action: TeamCommand,
    },

    /// Ebook library
    Ebooks {
        #[command(subcommand)]
        action: EbookCommand,
    },

    /// Newsletter subscription
    Newsletter {
        #[command(subcommand)]
        action: NewsletterCommand,
    },

    /// Admin token stored in the preference file
    Auth {
        #[command(subcommand)]
        action: AuthCommand,
    },

    /// Check configuration, storage and API reachability
    Doctor {
        /// Also fetch the content endpoint
        #[arg(long)]
        online: bool,
    },
}

#[derive(Subcommand)]
enum ContentCommand {
    /// Resolve one content key
    Get {
        #[arg(value_name = "KEY")]
        key: String,

        /// Printed when the key is missing or the fetch fails
        #[arg(long, default_value = "")]
        fallback: String,

        /// Language (default: the saved preference)
        #[arg(long)]
        lang: Option<Lang>,
    },

    /// Print the whole dictionary
    Dump {
        #[arg(long)]
        lang: Option<Lang>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
enum LangCommand {
    Show,
    Toggle,
    Set {
        /// en or ta
        #[arg(value_name = "CODE")]
        lang: Lang,
    },
}

#[derive(Subcommand)]
enum ThemeCommand {
    Show,
    Toggle,
    Set {
        /// light or dark
        #[arg(value_name = "THEME")]
        theme: ThemeName,
    },
    /// Print the current palette as CSS custom properties
    Css,
}

#[derive(Subcommand)]
enum PosterCommand {
    List {
        /// Case-insensitive search over titles and descriptions
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(long, value_enum, default_value_t)]
        status: StatusFilter,

        #[arg(long)]
        priority: Option<i32>,

        #[arg(short, long, default_value = "1")]
        page: usize,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    Show {
        #[arg(value_name = "ID")]
        id: String,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    Stats {
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    Create {
        #[command(flatten)]
        fields: PosterFields,
    },

    Update {
        #[arg(value_name = "ID")]
        id: String,

        #[command(flatten)]
        fields: PosterFields,
    },

    /// Flip the active flag
    Toggle {
        #[arg(value_name = "ID")]
        id: String,
    },

    Delete {
        #[arg(value_name = "ID")]
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Download the CSV export
    Export {
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Args, Debug)]
struct PosterFields {
    #[arg(long)]
    title_en: Option<String>,
    #[arg(long)]
    title_ta: Option<String>,
    #[arg(long)]
    description_en: Option<String>,
    #[arg(long)]
    description_ta: Option<String>,
    #[arg(long)]
    link_url: Option<String>,
    /// 0 to 100
    #[arg(long)]
    priority: Option<i32>,
    /// true or false
    #[arg(long)]
    active: Option<bool>,
    /// YYYY-MM-DD
    #[arg(long)]
    start_date: Option<NaiveDate>,
    /// YYYY-MM-DD
    #[arg(long)]
    end_date: Option<NaiveDate>,
    /// JPEG, PNG, WebP or GIF, at most 5 MiB
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,
}

impl PosterFields {
    fn apply(self, form: &mut PosterForm) -> Result<()> {
        if let Some(value) = self.title_en {
            form.title_en = value;
        }
        if let Some(value) = self.title_ta {
            form.title_ta = value;
        }
        if let Some(value) = self.description_en {
            form.description_en = value;
        }
        if let Some(value) = self.description_ta {
            form.description_ta = value;
        }
        if let Some(value) = self.link_url {
            form.link_url = value;
        }
        if let Some(value) = self.priority {
            form.priority = value;
        }
        if let Some(value) = self.active {
            form.is_active = value;
        }
        if self.start_date.is_some() {
            form.start_date = self.start_date;
        }
        if self.end_date.is_some() {
            form.end_date = self.end_date;
        }
        if let Some(path) = self.image {
            let upload = ImageUpload::from_path(&path)
                .with_context(|| format!("reading image {}", path.display()))?;
            form.image = Some(upload);
        }
        Ok(())
    }
}

#[derive(Subcommand)]
enum TeamCommand {
    List {
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
enum EbookCommand {
    List {
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(long)]
        category: Option<String>,

        #[arg(short, long, default_value = "1")]
        page: usize,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
enum NewsletterCommand {
    Subscribe {
        #[arg(value_name = "EMAIL")]
        email: String,
    },
}

#[derive(Subcommand)]
enum AuthCommand {
    SetToken {
        #[arg(value_name = "TOKEN")]
        token: String,
    },
    Clear,
}

/// Shared state for one invocation.
struct App {
    config: SiteConfig,
    storage: Arc<dyn PreferenceStore>,
    language: LanguageStore,
}

impl App {
    fn lang(&self) -> Lang {
        self.language.language()
    }

    fn client(&self) -> Result<ApiClient> {
        let client = ApiClient::new(&self.config.api_base_url, self.config.request_timeout())?;
        Ok(client.with_stored_token(self.storage.as_ref()))
    }

    fn theme_store(&self) -> ThemeStore {
        let sink: Arc<dyn StyleSink> = match &self.config.css_output {
            Some(path) => Arc::new(CssFileSink::new(path)),
            None => Arc::new(DetachedSink),
        };
        ThemeStore::new(
            Arc::clone(&self.storage),
            sink,
            platform_preference(),
            self.config.theme.timing(),
        )
    }

    fn admin(&self) -> Result<PosterAdmin> {
        Ok(PosterAdmin::new(self.client()?, self.lang()).with_page_size(self.config.page_size))
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "tamil_site=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Print `value` in a machine format, or run `table` for the colored view.
fn emit<T: Serialize + ?Sized>(format: OutputFormat, value: &T, table: impl FnOnce()) -> Result<()> {
    match format.serialize(value)? {
        Some(text) => println!("{}", text.trim_end()),
        None => table(),
    }
    Ok(())
}

fn prompt_yes_no(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Wait out a theme transition so the stylesheet and preference are written
/// before the process exits.
async fn settle(transition: Option<Transition>) {
    if let Some(transition) = transition {
        transition.finished().await;
    }
}

/// Print queued toasts and turn a failed admin operation into an exit error.
fn finish(admin: &mut PosterAdmin, formatter: &ListingFormatter, ok: bool) -> Result<()> {
    formatter.print_toasts(&admin.toasts_mut().drain());
    if ok {
        Ok(())
    } else {
        Err(anyhow!("poster operation failed"))
    }
}

async fn submit_form(
    admin: &mut PosterAdmin,
    form: &PosterForm,
    formatter: &ListingFormatter,
    lang: Lang,
) -> Result<()> {
    let outcome = admin.submit(form).await;
    if outcome == SubmitOutcome::Invalid {
        for (field, message) in admin.field_errors().messages(lang) {
            eprintln!("  {} {}", format!("{}:", field).red(), message);
        }
    }
    finish(admin, formatter, outcome == SubmitOutcome::Saved)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = SiteConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
        config.validate()?;
    }
    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .or_else(config::default_config_path);

    let storage: Arc<dyn PreferenceStore> = Arc::new(FileStore::new(config.resolved_storage_path()));
    let language = LanguageStore::new(Arc::clone(&storage));
    let app = App {
        config,
        storage,
        language,
    };
    let formatter = ListingFormatter::new(app.lang());

    match cli.command {
        Commands::Content { action } => run_content(&app, action).await?,

        Commands::Lang { action } => {
            match action {
                LangCommand::Show => {}
                LangCommand::Toggle => {
                    app.language.toggle();
                }
                LangCommand::Set { lang } => app.language.set_language(lang),
            }
            let lang = app.lang();
            println!("{} ({})", lang.code(), lang.native_name());
        }

        Commands::Theme { action } => {
            let themes = app.theme_store();
            match action {
                ThemeCommand::Show => formatter.print_palette(themes.palette()),
                ThemeCommand::Toggle => {
                    settle(themes.toggle()).await;
                    println!("{}", themes.theme());
                }
                ThemeCommand::Set { theme } => {
                    settle(themes.set_theme(theme)).await;
                    println!("{}", themes.theme());
                }
                ThemeCommand::Css => print!("{}", themes.palette().to_css()),
            }
        }

        Commands::Posters { action } => run_posters(&app, action, &formatter).await?,

        Commands::Team {
            action: TeamCommand::List { format },
        } => {
            let client = app.client()?;
            let team = load_team(&client, app.lang())
                .await
                .map_err(|err| anyhow!(err.user_message(app.lang())))?;
            emit(format, &team, || formatter.print_team(&team))?;
        }

        Commands::Ebooks {
            action:
                EbookCommand::List {
                    search,
                    category,
                    page,
                    format,
                },
        } => {
            let client = app.client()?;
            let mut shelf = EbookShelf::load(&client, app.lang())
                .await
                .map_err(|err| anyhow!(err.user_message(app.lang())))?
                .with_page_size(app.config.page_size);
            shelf.set_filter(EbookFilter { search, category });
            shelf.set_page(page);
            let visible = shelf.visible_page();
            emit(format, &visible, || formatter.print_ebooks(&visible))?;
        }

        Commands::Newsletter {
            action: NewsletterCommand::Subscribe { email },
        } => {
            let lang = app.lang();
            let message = app
                .client()?
                .subscribe_newsletter(&email, lang)
                .await
                .map_err(|err| anyhow!(err.user_message(lang)))?;
            let message = message.unwrap_or_else(|| t(lang, "newsletter.subscribed").to_string());
            println!("{}", message.green());
        }

        Commands::Auth { action } => match action {
            AuthCommand::SetToken { token } => {
                let token = token.trim();
                if token.is_empty() {
                    bail!("token must not be empty");
                }
                app.storage.set(TOKEN_KEY, token)?;
                println!("admin token saved");
            }
            AuthCommand::Clear => {
                app.storage.remove(TOKEN_KEY)?;
                println!("admin token cleared");
            }
        },

        Commands::Doctor { online } => {
            diagnostics::run_self_diagnostics(&app.config, config_path.as_deref(), online).await?
        }
    }

    Ok(())
}

async fn run_content(app: &App, action: ContentCommand) -> Result<()> {
    // `get` always prints something; `dump` without a dictionary is an error.
    let (lang, needs_dictionary) = match &action {
        ContentCommand::Get { lang, .. } => (lang.unwrap_or_else(|| app.lang()), false),
        ContentCommand::Dump { lang, .. } => (lang.unwrap_or_else(|| app.lang()), true),
    };
    let client = app.client()?;
    let mut content = SiteContent::new(lang);
    if let Err(err) = content.load(&client, lang).await {
        if needs_dictionary {
            bail!(err.user_message(lang));
        }
        tracing::warn!(error = %err, "content unavailable, printing fallback");
    }

    match action {
        ContentCommand::Get { key, fallback, .. } => println!("{}", content.text(&key, &fallback)),
        ContentCommand::Dump { format, .. } => {
            let dictionary = content.dictionary().cloned().unwrap_or_default();
            emit(format, &dictionary, || {
                for (key, value) in &dictionary {
                    println!("{:32} {}", key.cyan(), value.get(lang).unwrap_or(""));
                }
            })?;
        }
    }
    Ok(())
}

async fn run_posters(app: &App, action: PosterCommand, formatter: &ListingFormatter) -> Result<()> {
    let lang = app.lang();
    let mut admin = app.admin()?;

    match action {
        PosterCommand::List {
            search,
            status,
            priority,
            page,
            format,
        } => {
            let loaded = admin.refresh().await;
            admin.set_filter(PosterFilter {
                search,
                status,
                priority,
            });
            admin.set_page(page);
            if loaded {
                let visible = admin.visible_page();
                emit(format, &visible, || formatter.print_posters(&visible))?;
            }
            finish(&mut admin, formatter, loaded)
        }

        PosterCommand::Show { id, format } => {
            let poster = app
                .client()?
                .poster(&id)
                .await
                .map_err(|err| anyhow!(err.user_message(lang)))?;
            emit(format, &poster, || formatter.print_poster(&poster))
        }

        PosterCommand::Stats { format } => {
            admin.refresh().await;
            let Some(stats) = admin.stats().cloned() else {
                return finish(&mut admin, formatter, false);
            };
            emit(format, &stats, || formatter.print_stats(&stats))?;
            finish(&mut admin, formatter, true)
        }

        PosterCommand::Create { fields } => {
            let mut form = PosterForm::new("", "");
            fields.apply(&mut form)?;
            admin.open_create();
            submit_form(&mut admin, &form, formatter, lang).await
        }

        PosterCommand::Update { id, fields } => {
            admin.refresh().await;
            let Some(mut form) = admin.open_edit(&id) else {
                return finish(&mut admin, formatter, false);
            };
            fields.apply(&mut form)?;
            submit_form(&mut admin, &form, formatter, lang).await
        }

        PosterCommand::Toggle { id } => {
            let ok = admin.toggle_status(&id).await;
            finish(&mut admin, formatter, ok)
        }

        PosterCommand::Delete { id, yes } => {
            let confirm = |prompt: &str| yes || prompt_yes_no(prompt);
            let ok = admin.delete(&id, &confirm).await;
            finish(&mut admin, formatter, ok)
        }

        PosterCommand::Export { dir } => {
            let summary = admin.export_csv(export_dir(&dir)).await;
            if let Some(summary) = &summary {
                println!("{} ({} rows)", summary.path.display(), summary.rows);
            }
            finish(&mut admin, formatter, summary.is_some())
        }
    }
}

fn export_dir(dir: &Path) -> &Path {
    if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    }
}
