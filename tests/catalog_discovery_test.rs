// tests/catalog_discovery_test.rs

mod common;

use std::fs;
use vueschool_dl::{
    catalog::{Catalog, CatalogDiscoverer, Chapter, Course, cache},
    client::Session,
    config::CachePolicy,
    error::AppError,
};

async fn mock_catalog_site(server: &mut mockito::ServerGuard) -> Vec<mockito::Mock> {
    vec![
        common::mock_page(server, "/courses", "courses.html").await,
        common::mock_page(server, "/courses/vue-components-and-props", "course_components.html").await,
        common::mock_page(server, "/courses/quiz-only", "course_quiz_only.html").await,
    ]
}

#[tokio::test]
async fn test_live_discovery_builds_ordered_catalog_and_caches_it() {
    let mut server = mockito::Server::new_async().await;
    let mocks = mock_catalog_site(&mut server).await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_for(&server, dir.path());
    let session = Session::new(&config).unwrap();

    let catalog = CatalogDiscoverer::new(&session)
        .discover(CachePolicy::PreferCache, &config.catalog_file)
        .await
        .unwrap();

    assert_eq!(catalog.titles(), vec!["Vue: Components & Props", "Quiz Only"]);
    let course = catalog.get("Vue: Components & Props").unwrap();
    assert_eq!(
        course.chapters,
        vec![
            Chapter { slug: "intro-to-components".into(), url: "/lessons/intro-to-components".into() },
            Chapter { slug: "001".into(), url: "/lessons/activity/001".into() },
            Chapter { slug: "passing-props".into(), url: "/lessons/passing-props".into() },
        ]
    );

    // 缓存文件与返回结果一致，并保持页面顺序
    assert_eq!(cache::load(&config.catalog_file), Some(catalog));
    let raw = fs::read_to_string(&config.catalog_file).unwrap();
    assert!(raw.find("Vue: Components & Props").unwrap() < raw.find("Quiz Only").unwrap());

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_cached_catalog_skips_network() {
    let mut server = mockito::Server::new_async().await;
    let index = server.mock("GET", "/courses").expect(0).create_async().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_for(&server, dir.path());

    let mut cached = Catalog::new();
    let mut course = Course::new("Cached Course");
    course.insert_chapter("intro", "/lessons/intro");
    cached.insert(course);
    cache::store(&config.catalog_file, &cached).unwrap();

    let session = Session::new(&config).unwrap();
    let catalog = CatalogDiscoverer::new(&session)
        .discover(CachePolicy::PreferCache, &config.catalog_file)
        .await
        .unwrap();

    assert_eq!(catalog, cached);
    index.assert_async().await;
}

#[tokio::test]
async fn test_refresh_ignores_and_overwrites_cache() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = mock_catalog_site(&mut server).await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_for(&server, dir.path());
    fs::write(&config.catalog_file, r#"{"Stale Course": {"old": "/lessons/old"}}"#).unwrap();

    let session = Session::new(&config).unwrap();
    let catalog = CatalogDiscoverer::new(&session)
        .discover(CachePolicy::Refresh, &config.catalog_file)
        .await
        .unwrap();

    assert!(catalog.get("Stale Course").is_none());
    assert_eq!(cache::load(&config.catalog_file), Some(catalog));
}

#[tokio::test]
async fn test_failed_course_page_is_skipped_and_not_cached() {
    let mut server = mockito::Server::new_async().await;
    let _index = common::mock_page(&mut server, "/courses", "courses.html").await;
    let _ok = common::mock_page(&mut server, "/courses/vue-components-and-props", "course_components.html").await;
    let _broken = server
        .mock("GET", "/courses/quiz-only")
        .with_status(500)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_for(&server, dir.path());
    let session = Session::new(&config).unwrap();

    let catalog = CatalogDiscoverer::new(&session)
        .discover(CachePolicy::PreferCache, &config.catalog_file)
        .await
        .unwrap();

    assert_eq!(catalog.titles(), vec!["Vue: Components & Props"]);
    assert!(!config.catalog_file.exists());
}

#[tokio::test]
async fn test_unreachable_course_index_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    let _index = server
        .mock("GET", "/courses")
        .with_status(503)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_for(&server, dir.path());
    let session = Session::new(&config).unwrap();

    let result = CatalogDiscoverer::new(&session)
        .discover(CachePolicy::PreferCache, &config.catalog_file)
        .await;

    assert!(matches!(result, Err(AppError::Discovery(_))));
}
