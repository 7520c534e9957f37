// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{create_test_server, StubFetcher, API_TOKEN};
use axum::http::StatusCode;
use serde_json::{json, Value};

fn bearer() -> String {
    format!("Bearer {}", API_TOKEN)
}

/// 找到网站且域名匹配
#[tokio::test]
async fn check_returns_found_and_domain_match() {
    let fetcher = StubFetcher::body(r#")]}'[[null,[1,["https://example.com","Example"]]]]"#);
    let server = create_test_server(fetcher.clone());

    let response = server
        .post("/api/check")
        .add_header("Authorization", bearer())
        .json(&json!({"placeid": "X", "domain": "example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"],
        json!({
            "placeid": "X",
            "domain": "example.com",
            "websiteFound": true,
            "website": "https://example.com",
            "domainMatch": true,
            "status": 1
        })
    );
    assert_eq!(fetcher.calls(), 1);
}

/// 原始令牌（不带 Bearer）同样有效，且参数会去除空白
#[tokio::test]
async fn check_accepts_raw_token_and_trims_input() {
    let fetcher = StubFetcher::body(r#")]}'[["https://shop.other.net","Shop"]]"#);
    let server = create_test_server(fetcher);

    let response = server
        .post("/api/check")
        .add_header("Authorization", API_TOKEN)
        .json(&json!({"placeid": "  X  ", "domain": " example.com "}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    let data = &body["data"];
    assert_eq!(data["placeid"], "X");
    assert_eq!(data["domain"], "example.com");
    assert_eq!(data["websiteFound"], true);
    assert_eq!(data["domainMatch"], false);
    assert!(data.get("error").is_none());
}

/// 没有内嵌状态的 HTML 返回状态 4，HTTP 仍为 200
#[tokio::test]
async fn check_without_embedded_state_reports_status_four() {
    let fetcher = StubFetcher::body("<html><body>Before you continue</body></html>");
    let server = create_test_server(fetcher);

    let response = server
        .post("/api/check")
        .add_header("Authorization", bearer())
        .json(&json!({"placeid": "X", "domain": "example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], 4);
    assert_eq!(body["data"]["websiteFound"], false);
    assert_eq!(body["data"]["domainMatch"], false);
    assert!(body["data"]["website"].is_null());
    assert!(body["data"]["error"].as_str().unwrap().contains("not found"));
}

/// 上游错误同样以状态 4 返回
#[tokio::test]
async fn check_transport_failure_reports_status_four() {
    let server = create_test_server(StubFetcher::status(500));

    let response = server
        .post("/api/check")
        .add_header("Authorization", bearer())
        .json(&json!({"placeid": "X", "domain": "example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    let data = &body["data"];
    assert_eq!(data["status"], 4);
    assert_eq!(data["error"], "Request failed: upstream returned HTTP 500");
}

/// Lite 页面按未找到处理
#[tokio::test]
async fn check_lite_page_reports_not_found() {
    let server = create_test_server(StubFetcher::body(")]}'[null,null,null,[]]"));

    let response = server
        .post("/api/check")
        .add_header("Authorization", bearer())
        .json(&json!({"placeid": "X", "domain": "example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    let data = &body["data"];
    assert_eq!(data["status"], 0);
    assert_eq!(data["websiteFound"], false);
    assert!(data["website"].is_null());
    assert!(data.get("error").is_none());
}

#[tokio::test]
async fn check_without_auth_returns_401() {
    let fetcher = StubFetcher::body("");
    let server = create_test_server(fetcher.clone());

    let response = server
        .post("/api/check")
        .json(&json!({"placeid": "X", "domain": "example.com"}))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["success"], false);
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn check_with_wrong_token_returns_403() {
    let server = create_test_server(StubFetcher::body(""));

    let response = server
        .post("/api/check")
        .add_header("Authorization", "Bearer nope")
        .json(&json!({"placeid": "X", "domain": "example.com"}))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["error"], "Invalid token");
}

#[tokio::test]
async fn check_rejects_blank_fields_before_fetching() {
    let fetcher = StubFetcher::body("");
    let server = create_test_server(fetcher.clone());

    for (payload, message) in [
        (json!({"domain": "example.com"}), "placeid is required"),
        (json!({"placeid": "  ", "domain": "example.com"}), "placeid is required"),
        (json!({"placeid": "X"}), "domain is required"),
        (json!({"placeid": "X", "domain": 5}), "domain is required"),
    ] {
        let response = server
            .post("/api/check")
            .add_header("Authorization", bearer())
            .json(&payload)
            .expect_failure()
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], message);
    }

    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn check_rejects_malformed_json() {
    let server = create_test_server(StubFetcher::body(""));

    let response = server
        .post("/api/check")
        .add_header("Authorization", bearer())
        .add_header("Content-Type", "application/json")
        .text("{not json")
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["success"], false);
}
