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

use async_trait::async_trait;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("{0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非 2xx 响应
    #[error("upstream returned HTTP {0}")]
    HttpStatus(u16),
    /// 其他错误
    #[error("{0}")]
    Other(String),
}

impl EngineError {
    /// 判断错误是否可重试
    ///
    /// 本服务自身不重试，由调用方决定
    pub fn is_retryable(&self) -> bool {
        match self {
            EngineError::RequestFailed(e) => e.is_timeout() || e.is_connect(),
            EngineError::HttpStatus(status) => *status >= 500 || *status == 429,
            EngineError::Other(_) => false,
        }
    }
}

/// 抓取请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// 目标URL
    pub url: String,
    /// Referer 请求头
    pub referer: String,
}

/// 抓取器特质
///
/// 给定地址返回原始响应文本或传输错误。超时、重定向和请求头都属于实现方
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// 执行抓取
    async fn fetch(&self, request: &FetchRequest) -> Result<String, EngineError>;

    /// 抓取器名称
    fn name(&self) -> &'static str;
}
