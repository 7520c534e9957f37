// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::FetcherSettings;
use crate::engines::traits::{EngineError, FetchRequest, Fetcher};
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use std::net::{IpAddr, Ipv4Addr};
use std::time::{Duration, Instant};
use tracing::debug;

/// 浏览器导航时附带的固定请求头
const BROWSER_HEADERS: [(&str, &str); 7] = [
    ("dnt", "1"),
    ("sec-gpc", "1"),
    ("upgrade-insecure-requests", "1"),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "none"),
    ("sec-fetch-user", "?1"),
];

/// 抓取器
///
/// 基于reqwest实现，客户端在构造时按配置创建一次，之后所有请求共用
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// 根据配置创建抓取器
    ///
    /// # 参数
    ///
    /// * `settings` - 抓取器配置
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestFetcher)` - 创建成功
    /// * `Err(EngineError)` - 请求头非法或客户端构建失败
    pub fn new(settings: &FetcherSettings) -> Result<Self, EngineError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, header_value(&settings.accept)?);
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header_value(&settings.accept_language)?,
        );
        for (name, value) in BROWSER_HEADERS {
            headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(header_value(&settings.user_agent)?)
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .redirect(Policy::limited(settings.max_redirects));

        if settings.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Binding the unspecified IPv4 address keeps every connection on IPv4.
        if settings.force_ipv4 {
            builder = builder.local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, EngineError> {
    HeaderValue::from_str(value)
        .map_err(|e| EngineError::Other(format!("Invalid header value {:?}: {}", value, e)))
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    /// 执行HTTP抓取
    ///
    /// 非 2xx 响应视为传输错误
    async fn fetch(&self, request: &FetchRequest) -> Result<String, EngineError> {
        let start = Instant::now();
        let response = self
            .client
            .get(&request.url)
            .header(header::REFERER, header_value(&request.referer)?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::HttpStatus(status.as_u16()));
        }

        let content = response.text().await?;
        debug!(
            "Fetched {} bytes from {} in {}ms",
            content.len(),
            request.url,
            start.elapsed().as_millis()
        );
        Ok(content)
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
