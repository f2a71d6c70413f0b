use lc_companion::{
    catalog::{Difficulty, Status},
    judge::Session,
    Catalog, Companion, Error, Settings,
};
use tempfile::tempdir;
use wiremock::{
    matchers::{header, method, path},
    Mock, ResponseTemplate,
};

mod common;
use common::{index, platform, settings, TOKEN};

#[tokio::test]
async fn load_downloads_once() {
    let server = platform().await;
    Mock::given(method("GET"))
        .and(path("/api/problems/all/"))
        .and(header("x-csrftoken", TOKEN))
        .and(header(
            "referer",
            format!("{}/problemset/all/", server.uri()).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(index()))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempdir().unwrap();
    let session = Session::connect(settings(dir.path(), &server)).await.unwrap();
    let path = dir.path().join("lc.json");

    let first = Catalog::load(&path, &session).await.unwrap();
    assert!(path.is_file());
    let entry = first.resolve(1).unwrap();
    assert_eq!(entry.title_slug, "two-sum");
    assert_eq!(entry.status, Status::Accepted);
    assert_eq!(entry.difficulty, Some(Difficulty::Easy));
    assert_eq!(first.resolve(2).unwrap().status, Status::Untouched);

    let second = Catalog::load(&path, &session).await.unwrap();
    assert_eq!(first.entries(), second.entries());
    assert!(matches!(first.resolve(3), Err(Error::UnknownProblem(3))));
}

#[tokio::test]
async fn refresh_replaces_snapshot() {
    let server = platform().await;
    Mock::given(method("GET"))
        .and(path("/api/problems/all/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index()))
        .mount(&server)
        .await;
    let dir = tempdir().unwrap();
    let path = dir.path().join("lc.json");
    std::fs::write(&path, r#"{"stat_status_pairs": []}"#).unwrap();
    let session = Session::connect(settings(dir.path(), &server)).await.unwrap();

    let stale = Catalog::load(&path, &session).await.unwrap();
    assert!(stale.is_empty());
    let fresh = Catalog::refresh(&path, &session).await.unwrap();
    assert_eq!(fresh.len(), 2);
    let reopened = Catalog::open(&path).unwrap().unwrap();
    assert_eq!(fresh.entries(), reopened.entries());

    // Unknown fields survive the snapshot.
    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["num_solved"], 0);
    assert_eq!(saved["stat_status_pairs"][0]["stat"]["total_acs"], 100);
}

#[tokio::test]
async fn companion_uses_snapshot_without_network() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("lc.json"),
        serde_json::to_string(&index()).unwrap(),
    )
    .unwrap();
    let settings = Settings::in_dir(dir.path()).with_origin("http://127.0.0.1:9");
    let mut companion = Companion::new(settings);

    let entry = companion.resolve(2).await.unwrap();
    assert_eq!(entry.title, "Add Two Numbers");
    assert!(!companion.has_session());

    std::fs::create_dir(dir.path().join("2-python-add-two-numbers")).unwrap();
    let project = companion.local_project(2).await.unwrap();
    assert_eq!(project.language.name, "python");
    assert_eq!(companion.local_projects().await.unwrap(), vec![project]);
}

#[tokio::test]
async fn foreign_directories_are_skipped_when_listing() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("lc.json"),
        serde_json::to_string(&index()).unwrap(),
    )
    .unwrap();
    for name in ["2024-notes-misc", "1-cpp-wrong-slug", "2-rust-add-two-numbers", "2-cpp-add-two-numbers"] {
        std::fs::create_dir(dir.path().join(name)).unwrap();
    }
    let settings = Settings::in_dir(dir.path()).with_origin("http://127.0.0.1:9");
    let mut companion = Companion::new(settings);

    let projects = companion.local_projects().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].dir().to_str(), Some("2-cpp-add-two-numbers"));
    assert!(matches!(
        companion.local_project(1).await,
        Err(Error::SlugMismatch { id: 1, .. })
    ));
}

#[tokio::test]
async fn catalog_unavailable_without_handshake() {
    let server = wiremock::MockServer::start().await;
    let dir = tempdir().unwrap();
    let mut companion = Companion::new(settings(dir.path(), &server));
    let err = companion.catalog().await.err().unwrap();
    match err {
        Error::CatalogUnavailable(source) => {
            assert!(matches!(*source, Error::HandshakeFailed(_)), "{}", source)
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(!dir.path().join("lc.json").exists());
}
