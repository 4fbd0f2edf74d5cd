// SPDX-License-Identifier: PMPL-1.0-or-later

//! Poster administration against a mock API

use serde_json::{json, Value};
use std::time::Duration;
use tamil_site::admin::{
    paginate, Modal, PosterAdmin, PosterFilter, PosterForm, StatusFilter, SubmitOutcome, ToastKind,
};
use tamil_site::api::ApiClient;
use tamil_site::i18n::{t, Lang};
use tamil_site::types::Poster;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "admin-secret";

fn poster_json(id: &str, en: &str, ta: &str, active: bool, priority: i32) -> Value {
    json!({
        "_id": id,
        "title": { "en": en, "ta": ta },
        "description": { "en": format!("About {en}") },
        "priority": priority,
        "isActive": active,
        "viewCount": 3,
        "clickCount": 1
    })
}

fn sample_posters() -> Vec<Poster> {
    let raw = json!([
        poster_json("p1", "Pongal Festival", "பொங்கல் விழா", true, 10),
        poster_json("p2", "Book Fair", "புத்தகக் கண்காட்சி", false, 5),
        poster_json("p3", "Poetry Night", "கவிதை இரவு", true, 5),
        poster_json("p4", "Annual Meeting", "ஆண்டுக் கூட்டம்", false, 1),
    ]);
    serde_json::from_value(raw).unwrap()
}

fn stats_json(total: u64, active: u64) -> Value {
    json!({
        "success": true,
        "data": {
            "total": total,
            "active": active,
            "inactive": total - active,
            "totalViews": 12,
            "totalClicks": 4
        }
    })
}

async fn mount_listing(server: &MockServer, posters: Vec<Value>, expected: u64) {
    let active = posters
        .iter()
        .filter(|p| p["isActive"].as_bool().unwrap_or(false))
        .count() as u64;
    let total = posters.len() as u64;
    Mock::given(method("GET"))
        .and(path("/api/posters"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": posters })),
        )
        .expect(expected)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/posters/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_json(total, active)))
        .expect(expected)
        .mount(server)
        .await;
}

fn admin(server: &MockServer) -> PosterAdmin {
    let client = ApiClient::new(&server.uri(), Duration::from_secs(5))
        .unwrap()
        .with_token(Some(TOKEN.to_string()));
    PosterAdmin::new(client, Lang::En)
}

fn test_form() -> PosterForm {
    let mut form = PosterForm::new("Test", "டெஸ்ட்");
    form.priority = 1;
    form.is_active = true;
    form
}

fn multipart_field(name: &str, value: &str) -> String {
    format!("name=\"{name}\"\r\n\r\n{value}\r\n")
}

// ─── Filtering and pagination ───────────────────────────────────────

#[test]
fn test_status_filter_partitions_posters() {
    let posters = sample_posters();
    let only = |status| PosterFilter {
        status,
        ..PosterFilter::default()
    };

    let active = only(StatusFilter::Active).apply(&posters);
    assert!(active.iter().all(|p| p.is_active));
    assert_eq!(active.len(), 2);

    let inactive = only(StatusFilter::Inactive).apply(&posters);
    assert!(inactive.iter().all(|p| !p.is_active));
    assert_eq!(inactive.len(), 2);

    assert_eq!(only(StatusFilter::All).apply(&posters).len(), posters.len());
}

#[test]
fn test_search_covers_both_languages_and_description() {
    let posters = sample_posters();
    let search = |text: &str| PosterFilter {
        search: text.to_string(),
        ..PosterFilter::default()
    };
    let ids = |filter: PosterFilter| -> Vec<String> {
        filter.apply(&posters).iter().map(|p| p.id.clone()).collect()
    };

    assert_eq!(ids(search("POETRY")), vec!["p3"]);
    assert_eq!(ids(search("கவிதை")), vec!["p3"]);
    assert_eq!(ids(search("about book")), vec!["p2"]);
    assert_eq!(ids(search("   ")).len(), 4);
}

#[test]
fn test_priority_and_status_combine() {
    let posters = sample_posters();
    let filter = PosterFilter {
        search: String::new(),
        status: StatusFilter::Active,
        priority: Some(5),
    };
    let matched = filter.apply(&posters);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "p3");
}

#[test]
fn test_pagination_slices() {
    let items: Vec<usize> = (0..25).collect();
    for page in 1..=4 {
        let slice = paginate(&items, page, 10);
        let start = ((page - 1) * 10).min(items.len());
        let end = (page * 10).min(items.len());
        assert_eq!(slice.items, items[start..end].to_vec(), "page {page}");
        assert_eq!(slice.total_pages, 3);
    }
    assert!(paginate(&items, 4, 10).items.is_empty());

    let empty: Vec<usize> = Vec::new();
    let blank = paginate(&empty, 1, 10);
    assert!(blank.items.is_empty());
    assert_eq!(blank.total_pages, 1);
}

// ─── Listing ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_refresh_sends_bearer_token() {
    let server = MockServer::start().await;
    let bearer = format!("Bearer {TOKEN}");
    Mock::given(method("GET"))
        .and(path("/api/posters"))
        .and(header("authorization", bearer.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [poster_json("p1", "Pongal Festival", "பொங்கல் விழா", true, 10)]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/posters/stats"))
        .and(header("authorization", bearer.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_json(1, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let mut admin = admin(&server);
    assert!(admin.refresh().await);
    assert_eq!(admin.posters().len(), 1);
    assert_eq!(admin.stats().map(|s| s.active), Some(1));
    assert!(admin.toasts().pending().is_empty());
}

#[tokio::test]
async fn test_filter_change_resets_page() {
    let server = MockServer::start().await;
    let posters: Vec<Value> = (1..=15)
        .map(|i| poster_json(&format!("p{i}"), &format!("Poster {i}"), "போஸ்டர்", i % 3 != 0, i))
        .collect();
    mount_listing(&server, posters, 1).await;

    let mut admin = admin(&server);
    admin.refresh().await;
    admin.set_page(2);
    assert_eq!(admin.visible_page().items.len(), 5);

    admin.set_filter(PosterFilter {
        status: StatusFilter::Inactive,
        ..PosterFilter::default()
    });
    let page = admin.visible_page();
    assert_eq!(page.page, 1);
    assert_eq!(page.total_items, 5);
    assert!(page.items.iter().all(|p| !p.is_active));
}

#[tokio::test]
async fn test_unauthorized_refresh_becomes_toast() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let mut admin = admin(&server);
    assert!(!admin.refresh().await);
    let toasts = admin.toasts().pending();
    assert_eq!(toasts[0].kind, ToastKind::Error);
    assert_eq!(toasts[0].message, t(Lang::En, "error.unauthorized"));
}

// ─── Create / edit ──────────────────────────────────────────────────

#[tokio::test]
async fn test_add_poster_posts_multipart_and_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posters"))
        .and(body_string_contains(multipart_field("title.en", "Test")))
        .and(body_string_contains(multipart_field("title.ta", "டெஸ்ட்")))
        .and(body_string_contains(multipart_field("priority", "1")))
        .and(body_string_contains(multipart_field("is_active", "true")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": poster_json("new", "Test", "டெஸ்ட்", true, 1)
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_listing(
        &server,
        vec![poster_json("new", "Test", "டெஸ்ட்", true, 1)],
        1,
    )
    .await;

    let mut admin = admin(&server);
    admin.open_create();
    let outcome = admin.submit(&test_form()).await;

    assert_eq!(outcome, SubmitOutcome::Saved);
    assert_eq!(admin.modal(), &Modal::Closed);
    assert_eq!(admin.posters().len(), 1);
    assert_eq!(admin.stats().map(|s| s.total), Some(1));
    let toast = admin.toasts().last().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, t(Lang::En, "poster.created"));
}

#[tokio::test]
async fn test_add_poster_omits_empty_optional_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;
    mount_listing(&server, Vec::new(), 1).await;

    let mut admin = admin(&server);
    admin.open_create();
    admin.submit(&test_form()).await;

    let requests = server.received_requests().await.unwrap();
    let post = requests
        .iter()
        .find(|r| r.method.as_str() == "POST")
        .unwrap();
    let body = String::from_utf8_lossy(&post.body);
    assert!(!body.contains("name=\"description.en\""));
    assert!(!body.contains("name=\"start_date\""));
    assert!(!body.contains("name=\"image\""));
}

#[tokio::test]
async fn test_server_error_keeps_modal_open() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posters"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "success": false, "message": "Title already exists" })),
        )
        .mount(&server)
        .await;
    mount_listing(&server, Vec::new(), 0).await;

    let mut admin = admin(&server);
    admin.open_create();
    let outcome = admin.submit(&test_form()).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(admin.modal(), &Modal::Create);
    let toast = admin.toasts().last().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Title already exists");
}

#[tokio::test]
async fn test_server_error_without_message_uses_generic_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posters"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("<html><body>Bad Gateway</body></html>"),
        )
        .mount(&server)
        .await;

    let mut admin = admin(&server);
    admin.open_create();
    assert_eq!(admin.submit(&test_form()).await, SubmitOutcome::Failed);
    assert_eq!(admin.modal(), &Modal::Create);
    assert_eq!(
        admin.toasts().last().unwrap().message,
        t(Lang::En, "error.generic")
    );
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let server = MockServer::start().await;
    let mut admin = admin(&server);
    admin.open_create();

    let mut form = test_form();
    form.title_ta = "  ".into();
    form.priority = 101;

    assert_eq!(admin.submit(&form).await, SubmitOutcome::Invalid);
    assert_eq!(admin.modal(), &Modal::Create);
    assert_eq!(
        admin.field_errors().get("title.ta"),
        Some("validation.title_ta_required")
    );
    assert_eq!(admin.field_errors().get("priority"), Some("validation.priority_range"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_without_modal_is_ignored() {
    let server = MockServer::start().await;
    let mut admin = admin(&server);
    assert_eq!(admin.submit(&test_form()).await, SubmitOutcome::NoModal);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_edit_puts_to_poster_path() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        vec![poster_json("p1", "Pongal Festival", "பொங்கல் விழா", true, 10)],
        2,
    )
    .await;
    Mock::given(method("PUT"))
        .and(path("/api/posters/p1"))
        .and(body_string_contains(multipart_field("title.en", "Pongal 2026")))
        .and(body_string_contains(multipart_field("description.en", "About Pongal Festival")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let mut admin = admin(&server);
    admin.refresh().await;
    let mut form = admin.open_edit("p1").expect("cached poster");
    assert_eq!(admin.modal(), &Modal::Edit("p1".into()));
    assert_eq!(form.title_ta, "பொங்கல் விழா");

    form.title_en = "Pongal 2026".into();
    assert_eq!(admin.submit(&form).await, SubmitOutcome::Saved);
    assert_eq!(
        admin.toasts().last().unwrap().message,
        t(Lang::En, "poster.updated")
    );
}

#[tokio::test]
async fn test_edit_unknown_poster_reports_not_found() {
    let server = MockServer::start().await;
    let mut admin = admin(&server);
    assert!(admin.open_edit("missing").is_none());
    assert_eq!(admin.modal(), &Modal::Closed);
    assert_eq!(
        admin.toasts().last().unwrap().message,
        t(Lang::En, "poster.not_found")
    );
}

// ─── Toggle / delete / export ───────────────────────────────────────

#[tokio::test]
async fn test_toggle_patches_and_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/posters/p1/toggle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;
    mount_listing(
        &server,
        vec![poster_json("p1", "Pongal Festival", "பொங்கல் விழா", false, 10)],
        1,
    )
    .await;

    let mut admin = admin(&server);
    assert!(admin.toggle_status("p1").await);
    assert!(!admin.posters()[0].is_active);
    assert_eq!(admin.toasts().last().unwrap().kind, ToastKind::Success);
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let server = MockServer::start().await;
    let mut admin = admin(&server);

    let prompts = std::cell::RefCell::new(Vec::new());
    let decline = |prompt: &str| {
        prompts.borrow_mut().push(prompt.to_string());
        false
    };
    assert!(!admin.delete("p1", &decline).await);

    assert_eq!(prompts.into_inner(), vec![t(Lang::En, "poster.confirm_delete")]);
    assert!(server.received_requests().await.unwrap().is_empty());
    assert!(admin.toasts().pending().is_empty());
}

#[tokio::test]
async fn test_confirmed_delete_removes_poster() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/posters/p1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "message": "Poster deleted" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_listing(&server, Vec::new(), 1).await;

    let mut admin = admin(&server);
    assert!(admin.delete("p1", &|_: &str| true).await);
    assert!(admin.posters().is_empty());
    assert_eq!(
        admin.toasts().last().unwrap().message,
        t(Lang::En, "poster.deleted")
    );
}

#[tokio::test]
async fn test_failed_delete_shows_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/posters/p1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Poster not found" })))
        .mount(&server)
        .await;
    mount_listing(&server, Vec::new(), 0).await;

    let mut admin = admin(&server);
    assert!(!admin.delete("p1", &|_: &str| true).await);
    assert_eq!(admin.toasts().last().unwrap().message, "Poster not found");
}

#[tokio::test]
async fn test_poster_id_stays_one_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    client.toggle_poster("p1/toggle?x=1#y").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/api/posters/p1%2Ftoggle%3Fx=1%23y/toggle");
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_export_writes_timestamped_csv() {
    let server = MockServer::start().await;
    let csv = "id,title_en,title_ta,is_active\np1,Pongal Festival,பொங்கல் விழா,true\np2,Book Fair,புத்தகக் கண்காட்சி,false\n";
    Mock::given(method("GET"))
        .and(path("/api/posters/export"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/csv; charset=utf-8")
                .set_body_string(csv),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut admin = admin(&server);
    let summary = admin.export_csv(dir.path()).await.expect("export saved");

    assert_eq!(summary.rows, 2);
    let name = summary.path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("posters-") && name.ends_with(".csv"), "{name}");
    assert_eq!(std::fs::read_to_string(&summary.path).unwrap(), csv);
    assert_eq!(admin.toasts().last().unwrap().kind, ToastKind::Success);
}
