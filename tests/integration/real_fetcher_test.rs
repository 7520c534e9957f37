// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{create_app, API_TOKEN};
use axum_test::TestServer;
use placecheck::config::settings::FetcherSettings;
use placecheck::engines::reqwest_engine::ReqwestFetcher;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 使用真实抓取器访问模拟的地点页面，验证完整链路
#[tokio::test]
async fn check_through_reqwest_fetcher_and_html_payload() {
    let upstream = MockServer::start().await;
    let referer = upstream.uri();
    let html = r#"<!DOCTYPE html><html><head><script>window.APP_INITIALIZATION_STATE=[[[1,2]],null,null,[null,null,null,null,null,null,")]}'\n[[null,[\"https://www.Example.com/\",\"example.com\"]]]"]];window.APP_FLAGS=[];</script></head></html>"#;

    Mock::given(method("GET"))
        .and(path("/maps/place/"))
        .and(query_param("q", "place_id:ChIJtest"))
        .and(query_param("hl", "en"))
        .and(header("referer", referer.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .expect(1)
        .mount(&upstream)
        .await;

    let settings = FetcherSettings {
        base_url: format!("{}/maps/place/", upstream.uri()),
        timeout_secs: 5,
        ..FetcherSettings::default()
    };
    let fetcher = Arc::new(ReqwestFetcher::new(&settings).unwrap());
    let server = TestServer::new(create_app(fetcher, settings)).unwrap();

    let response = server
        .post("/api/check")
        .add_header("Authorization", format!("Bearer {}", API_TOKEN))
        .json(&json!({"placeid": "ChIJtest", "domain": "example.com"}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let data = &body["data"];
    assert_eq!(data["status"], 1);
    assert_eq!(data["website"], "https://www.Example.com/");
    assert_eq!(data["domainMatch"], true);
}
