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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 未配置令牌时使用的默认值
pub const DEFAULT_API_TOKEN: &str = "default-secret-token";

/// 应用程序配置设置
///
/// 包含服务器、认证和抓取器配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 认证配置
    pub auth: AuthSettings,
    /// 抓取器配置
    pub fetcher: FetcherSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 认证配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// `/api/check` 所需的共享令牌
    pub api_token: String,
}

/// 抓取器配置设置
///
/// 请求头、重定向和 TLS 行为都归抓取器所有，提取引擎不依赖这些配置
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherSettings {
    /// 地点页面基础地址，查询参数会追加在其后
    pub base_url: String,
    /// `hl` 语言参数
    pub language: String,
    /// 浏览器 User-Agent
    pub user_agent: String,
    /// Accept 请求头
    pub accept: String,
    /// Accept-Language 请求头
    pub accept_language: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 最大重定向次数
    pub max_redirects: usize,
    /// 是否接受无效证书
    pub accept_invalid_certs: bool,
    /// 是否强制使用 IPv4
    pub force_ipv4: bool,
}

impl Default for FetcherSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.google.com/maps/place/".to_string(),
            language: "en".to_string(),
            user_agent:
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:123.0) Gecko/20100101 Firefox/123.0"
                    .to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8"
                .to_string(),
            accept_language: "tr-TR,tr;q=0.8,en-US;q=0.5,en;q=0.3".to_string(),
            timeout_secs: 30,
            max_redirects: 10,
            accept_invalid_certs: true,
            force_ipv4: true,
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、配置文件、`PLACECHECK__*` 环境变量，
    /// 最后由旧版部署使用的 `PORT` 与 `API_TOKEN` 覆盖
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let fetcher = FetcherSettings::default();

        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("auth.api_token", DEFAULT_API_TOKEN)?
            .set_default("fetcher.base_url", fetcher.base_url)?
            .set_default("fetcher.language", fetcher.language)?
            .set_default("fetcher.user_agent", fetcher.user_agent)?
            .set_default("fetcher.accept", fetcher.accept)?
            .set_default("fetcher.accept_language", fetcher.accept_language)?
            .set_default("fetcher.timeout_secs", fetcher.timeout_secs)?
            .set_default("fetcher.max_redirects", fetcher.max_redirects as u64)?
            .set_default("fetcher.accept_invalid_certs", fetcher.accept_invalid_certs)?
            .set_default("fetcher.force_ipv4", fetcher.force_ipv4)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("PLACECHECK").separator("__"))
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("auth.api_token", std::env::var("API_TOKEN").ok())?;

        builder.build()?.try_deserialize()
    }

    /// 是否仍在使用默认令牌
    pub fn uses_default_token(&self) -> bool {
        self.auth.api_token == DEFAULT_API_TOKEN
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
