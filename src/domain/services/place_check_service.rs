// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{error, info};
use url::Url;

use crate::config::settings::FetcherSettings;
use crate::domain::models::place_check::{CheckResult, ExtractionOutcome, PlaceStatus};
use crate::domain::services::domain_matcher::domain_matches;
use crate::domain::services::extraction_service::ExtractionService;
use crate::engines::traits::{EngineError, FetchRequest, Fetcher};

/// 地点检查服务
///
/// 抓取地点页面、提取网站并与域名比较。服务本身无状态，
/// 只持有抓取器和构造查询地址所需的配置
#[derive(Clone)]
pub struct PlaceCheckService {
    fetcher: Arc<dyn Fetcher>,
    settings: FetcherSettings,
}

impl PlaceCheckService {
    pub fn new(fetcher: Arc<dyn Fetcher>, settings: FetcherSettings) -> Self {
        Self { fetcher, settings }
    }

    /// 构造地点查询请求
    ///
    /// 地址形如 `{base_url}?q=place_id:{id}&hl={language}`，
    /// Referer 为同一主机的 `http://` 地址
    pub fn build_request(&self, place_id: &str) -> Result<FetchRequest, EngineError> {
        let raw = format!(
            "{}?q=place_id:{}&hl={}",
            self.settings.base_url,
            urlencoding::encode(place_id.trim()),
            urlencoding::encode(&self.settings.language)
        );
        let url = Url::parse(&raw)
            .map_err(|e| EngineError::Other(format!("Invalid query URL {}: {}", raw, e)))?;

        let host = url
            .host_str()
            .ok_or_else(|| EngineError::Other(format!("Query URL has no host: {}", raw)))?;
        let referer = match url.port() {
            Some(port) => format!("http://{}:{}", host, port),
            None => format!("http://{}", host),
        };

        Ok(FetchRequest {
            url: url.to_string(),
            referer,
        })
    }

    /// 查询地点页面中的网站
    ///
    /// 传输错误不会向上传播，而是转换为 `Error` 状态
    pub async fn lookup(&self, place_id: &str) -> ExtractionOutcome {
        let request = match self.build_request(place_id) {
            Ok(request) => request,
            Err(e) => return ExtractionOutcome::error(format!("Request failed: {}", e)),
        };

        match self.fetcher.fetch(&request).await {
            Ok(payload) => ExtractionService::extract(&payload),
            Err(e) => {
                error!(
                    "{} fetch failed for place {}: {}",
                    self.fetcher.name(),
                    place_id,
                    e
                );
                ExtractionOutcome::error(format!("Request failed: {}", e))
            }
        }
    }

    /// 检查地点网站是否属于给定域名
    ///
    /// # 参数
    ///
    /// * `place_id` - 地点标识，已去除首尾空白
    /// * `domain` - 期望的域名，已去除首尾空白
    pub async fn check(&self, place_id: &str, domain: &str) -> CheckResult {
        let outcome = self.lookup(place_id).await;
        let website_found = outcome.status == PlaceStatus::Found;
        let domain_match = website_found && domain_matches(outcome.website.as_deref(), domain);

        info!(
            "Checked place {}: status={}, website={:?}, domain_match={}",
            place_id,
            outcome.status.code(),
            outcome.website,
            domain_match
        );

        CheckResult {
            placeid: place_id.to_string(),
            domain: domain.to_string(),
            website_found,
            website: outcome.website,
            domain_match,
            status: outcome.status,
            error: outcome.error,
        }
    }
}
