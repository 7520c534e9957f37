// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{create_app, StubFetcher, API_TOKEN};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use placecheck::config::settings::FetcherSettings;
use tower::util::ServiceExt;

/// 健康检查测试
///
/// 验证健康检查端点无需认证即可访问
#[tokio::test]
async fn health_check_works() {
    let app = create_app(StubFetcher::body(""), FetcherSettings::default());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Service is running");
}

/// 未知路由测试
///
/// 验证未匹配的路由返回 404 JSON
#[tokio::test]
async fn unknown_route_returns_404_json() {
    let app = create_app(StubFetcher::body(""), FetcherSettings::default());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/does/not/exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Endpoint not found");
}

/// 错误方法测试
///
/// 验证已知路径上不支持的方法同样返回 404 JSON
#[tokio::test]
async fn wrong_method_on_check_returns_404_json() {
    let fetcher = StubFetcher::body("");
    let app = create_app(fetcher.clone(), FetcherSettings::default());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/check")
                .header("Authorization", format!("Bearer {}", API_TOKEN))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Endpoint not found");
    assert_eq!(fetcher.calls(), 0);
}
