// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

/// 跨站脚本包含防护前缀
pub const XSSI_PREFIX: &str = ")]}'";

/// 页面内嵌状态变量名
pub const STATE_VARIABLE: &str = "APP_INITIALIZATION_STATE";

type Acceptor = fn(&str) -> bool;

/// 赋值语句终止符，按优先级排列，越靠前越具体
///
/// 最后的裸 `;` 可能截取过多内容，由后续 JSON 解析负责校验
static STATE_PATTERNS: Lazy<Vec<(&'static str, Regex, Acceptor)>> = Lazy::new(|| {
    [
        ("window.APP_FLAGS", r"\s*window\.APP_FLAGS"),
        ("this.gbar_", r"\s*this\.gbar_"),
        ("var", r"\s*var\s"),
        ("window.", r"\s*window\."),
        (";", ""),
    ]
    .into_iter()
    .map(|(name, terminator)| {
        let pattern = format!(r"window\.{}\s*=\s*(.*?);{}", STATE_VARIABLE, terminator);
        let regex = Regex::new(&pattern).expect("state pattern must compile");
        (name, regex, has_array_shape as Acceptor)
    })
    .collect()
});

/// 定位错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    /// 未找到内嵌数据，通常是反爬页面或精简页面
    #[error("Google Maps data not found (embedded state did not match)")]
    NoEmbeddedData,
}

/// JSON 文本的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSource {
    /// 带 `)]}'` 前缀的 JSON 响应
    Prefixed,
    /// 不带前缀的 JSON 数组
    BareJson,
    /// 从 HTML 赋值语句中截取，附带命中的终止符
    Html(&'static str),
}

/// 从原始响应中定位到的 JSON 文本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedJson<'a> {
    pub text: &'a str,
    pub source: PayloadSource,
}

/// 判断文本在去除空白后是否为 `[ ... ]` 形状
pub fn has_array_shape(text: &str) -> bool {
    let text = text.trim();
    text.starts_with('[') && text.ends_with(']')
}

/// 去除 `)]}'` 前缀
///
/// 文本（去除首部空白后）以前缀开头时返回剩余部分，否则返回 `None`
pub fn strip_xssi_prefix(text: &str) -> Option<&str> {
    text.trim_start()
        .strip_prefix(XSSI_PREFIX)
        .map(str::trim)
}

/// 定位响应中的 JSON 文本
///
/// 依次尝试：带前缀的 JSON、裸 JSON 数组、HTML 中的状态赋值语句
///
/// # 参数
///
/// * `payload` - 抓取器返回的原始响应
///
/// # 返回值
///
/// * `Ok(EmbeddedJson)` - 待解析的 JSON 文本
/// * `Err(LocatorError)` - 未找到可用的内嵌数据
pub fn locate(payload: &str) -> Result<EmbeddedJson<'_>, LocatorError> {
    if let Some(rest) = strip_xssi_prefix(payload) {
        return Ok(EmbeddedJson {
            text: rest,
            source: PayloadSource::Prefixed,
        });
    }

    let trimmed = payload.trim();
    if has_array_shape(trimmed) {
        return Ok(EmbeddedJson {
            text: trimmed,
            source: PayloadSource::BareJson,
        });
    }

    let mut matched_any = false;
    for (name, regex, accept) in STATE_PATTERNS.iter() {
        let Some(captured) = regex.captures(payload).and_then(|c| c.get(1)) else {
            continue;
        };
        matched_any = true;

        let candidate = captured.as_str().trim();
        if accept(candidate) {
            debug!("Embedded state located via terminator {:?}", name);
            return Ok(EmbeddedJson {
                text: candidate,
                source: PayloadSource::Html(*name),
            });
        }
        debug!("Terminator {:?} matched but capture is not an array", name);
    }

    if matched_any {
        warn!("{} assignment found but no capture had array shape", STATE_VARIABLE);
    } else {
        warn!(
            "{} not found in HTML response (bot detection or lite page?)",
            STATE_VARIABLE
        );
    }
    Err(LocatorError::NoEmbeddedData)
}
