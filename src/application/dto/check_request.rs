// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use serde_json::Value;

/// 地点检查请求数据传输对象
///
/// 字段保持为原始 JSON 值，类型错误与缺失一样按“必填”处理
#[derive(Debug, Default, Deserialize)]
pub struct CheckRequestDto {
    /// 地点标识
    #[serde(default)]
    pub placeid: Option<Value>,
    /// 期望的域名
    #[serde(default)]
    pub domain: Option<Value>,
}

/// 校验通过后的检查请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckQuery {
    pub placeid: String,
    pub domain: String,
}

impl CheckRequestDto {
    /// 校验并去除首尾空白
    ///
    /// # 返回值
    ///
    /// * `Ok(CheckQuery)` - 两个字段都是非空字符串
    /// * `Err(String)` - 第一个不合法字段的错误信息
    pub fn validate(&self) -> Result<CheckQuery, String> {
        Ok(CheckQuery {
            placeid: required_text(self.placeid.as_ref(), "placeid")?,
            domain: required_text(self.domain.as_ref(), "domain")?,
        })
    }
}

fn required_text(value: Option<&Value>, field: &str) -> Result<String, String> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(format!("{} is required", field)),
    }
}
