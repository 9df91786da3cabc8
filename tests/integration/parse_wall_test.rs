// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{cp1251, create_test_server, test_settings, WALL_PAGE};
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_wall(server: &MockServer, route: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header_exists("user-agent"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=windows-1251")
                .set_body_bytes(cp1251(html)),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_parse_wall_end_to_end() {
    let upstream = MockServer::start().await;
    mount_wall(&upstream, "/school5", WALL_PAGE).await;
    let server = create_test_server(&test_settings(0));

    let response = server
        .get("/parse")
        .add_query_param("url", format!("{}/school5", upstream.uri()))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let posts: Value = response.json();
    let posts = posts.as_array().unwrap();
    assert_eq!(posts.len(), 3);
    assert_eq!(
        posts[0],
        json!({
            "id": "post-5_100",
            "author": "Школа №5",
            "date": "сегодня в 9:00",
            "text": "Посадка деревьев у школы в субботу",
            "images": ["/photo-5_1", "/photo-5_2"],
            "comments": [{ "text": "Придём всем классом", "emojis": ["🌳"] }]
        })
    );
    assert_eq!(posts[2]["author"], "Мария");
    assert_eq!(posts[2]["text"], "Фотоотчёт");
}

#[tokio::test]
async fn test_parse_wall_with_keywords() {
    let upstream = MockServer::start().await;
    mount_wall(&upstream, "/school5", WALL_PAGE).await;
    let server = create_test_server(&test_settings(0));

    let response = server
        .get("/parse")
        .add_query_param("url", format!("{}/school5", upstream.uri()))
        .add_query_param("keywords", "посадка")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let posts: Value = response.json();
    let ids: Vec<&str> = posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    // the last post matches only through its comment
    assert_eq!(ids, vec!["post-5_100", "post-5_98"]);
}

#[tokio::test]
async fn test_parse_wall_paces_between_posts() {
    let upstream = MockServer::start().await;
    mount_wall(&upstream, "/school5", WALL_PAGE).await;
    let server = create_test_server(&test_settings(150));

    let start = Instant::now();
    let response = server
        .get("/parse")
        .add_query_param("url", format!("{}/school5", upstream.uri()))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    // three posts, two pauses
    assert!(start.elapsed() >= Duration::from_millis(300));
}

#[tokio::test]
async fn test_parse_wall_without_url() {
    let server = create_test_server(&test_settings(0));

    let response = server.get("/parse").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "error": "URL не указан" }));
}

#[tokio::test]
async fn test_upstream_error_is_not_an_empty_success() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;
    let server = create_test_server(&test_settings(0));

    let response = server
        .get("/parse")
        .add_query_param("url", format!("{}/broken", upstream.uri()))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_empty_wall_is_an_empty_array() {
    let upstream = MockServer::start().await;
    mount_wall(&upstream, "/empty", "<html><body>Записей нет</body></html>").await;
    let server = create_test_server(&test_settings(5000));

    let start = Instant::now();
    let response = server
        .get("/parse")
        .add_query_param("url", format!("{}/empty", upstream.uri()))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
    assert!(start.elapsed() < Duration::from_secs(5));
}
