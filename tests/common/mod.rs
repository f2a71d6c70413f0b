#![allow(dead_code)]

use lc_companion::{
    catalog::{CatalogEntry, Status},
    Settings,
};
use serde_json::{json, Value};
use std::path::Path;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const TOKEN: &str = "tok-1";

pub fn init_logging() {
    let _ = pretty_env_logger::formatted_timed_builder()
        .is_test(true)
        .try_init();
}

/// A platform whose landing page hands out the anti-forgery cookie.
pub async fn platform() -> MockServer {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("csrftoken={}; Path=/", TOKEN).as_str()),
        )
        .mount(&server)
        .await;
    server
}

pub fn settings(dir: &Path, server: &MockServer) -> Settings {
    Settings::in_dir(dir).with_origin(server.uri())
}

pub fn two_sum() -> CatalogEntry {
    CatalogEntry {
        question_id: 1,
        title: String::from("Two Sum"),
        title_slug: String::from("two-sum"),
        status: Status::Untouched,
        paid_only: false,
        difficulty: None,
    }
}

pub fn index() -> Value {
    json!({
        "user_name": "",
        "num_solved": 0,
        "stat_status_pairs": [
            {
                "stat": {
                    "question_id": 1,
                    "question__title": "Two Sum",
                    "question__title_slug": "two-sum",
                    "total_acs": 100
                },
                "status": "ac",
                "difficulty": { "level": 1 },
                "paid_only": false
            },
            {
                "stat": {
                    "question_id": 2,
                    "question__title": "Add Two Numbers",
                    "question__title_slug": "add-two-numbers"
                },
                "status": null,
                "difficulty": { "level": 2 },
                "paid_only": false
            }
        ]
    })
}
