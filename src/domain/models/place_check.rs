// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Serialize, Serializer};

/// 地点查询状态码
///
/// 对外以整数形式序列化。Lite 页面与普通未找到共用 `NotFound`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceStatus {
    /// 页面中没有网站
    NotFound,
    /// 找到网站
    Found,
    /// 抓取、定位或解析失败
    Error,
}

impl PlaceStatus {
    /// 对外暴露的数值代码
    pub fn code(self) -> u8 {
        match self {
            PlaceStatus::NotFound => 0,
            PlaceStatus::Found => 1,
            PlaceStatus::Error => 4,
        }
    }
}

impl Serialize for PlaceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// 单次提取的结果
///
/// `website` 当且仅当 `status == Found` 时存在
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionOutcome {
    pub status: PlaceStatus,
    pub website: Option<String>,
    pub error: Option<String>,
}

impl ExtractionOutcome {
    pub fn found(website: String) -> Self {
        Self {
            status: PlaceStatus::Found,
            website: Some(website),
            error: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: PlaceStatus::NotFound,
            website: None,
            error: None,
        }
    }

    pub fn error(cause: impl Into<String>) -> Self {
        Self {
            status: PlaceStatus::Error,
            website: None,
            error: Some(cause.into()),
        }
    }
}

/// 面向调用方的检查结果
///
/// 未找到网站时 `domain_match` 恒为 false
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub placeid: String,
    pub domain: String,
    pub website_found: bool,
    pub website: Option<String>,
    pub domain_match: bool,
    pub status: PlaceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
