// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::models::place_check::ExtractionOutcome;
use crate::domain::services::payload_locator::{self, LocatorError};
use crate::domain::services::tree_search::{self, NestedDocument};

/// 顶层提取错误
///
/// 只有外层负载的定位与解析失败会升级为错误，内嵌子文档的解析失败会被吞掉
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error(transparent)]
    Locator(#[from] LocatorError),
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 提取服务
///
/// 负责从抓取到的原始响应中找出网站地址并分类。无状态，可并发调用
pub struct ExtractionService;

impl ExtractionService {
    /// 提取网站并分类结果
    ///
    /// # 参数
    ///
    /// * `payload` - 抓取器返回的原始响应
    ///
    /// # 返回值
    ///
    /// 找到网站为 `Found`，未找到为 `NotFound`，外层定位或解析失败为 `Error`
    pub fn extract(payload: &str) -> ExtractionOutcome {
        match Self::find_website(payload) {
            Ok(Some(website)) => ExtractionOutcome::found(website),
            Ok(None) => ExtractionOutcome::not_found(),
            Err(e) => {
                warn!("Extraction failed: {}", e);
                ExtractionOutcome::error(e.to_string())
            }
        }
    }

    /// 定位、解析并搜索网站地址，必要时回退到内嵌子文档
    pub fn find_website(payload: &str) -> Result<Option<String>, ExtractionError> {
        let located = payload_locator::locate(payload)?;
        debug!(
            "Located {} bytes of embedded JSON via {:?}",
            located.text.len(),
            located.source
        );

        let root = parse_tree(located.text)?;
        if let Some(website) = tree_search::find_website(&root) {
            return Ok(Some(website.to_string()));
        }

        Ok(Self::search_nested_document(&root))
    }

    fn search_nested_document(root: &Value) -> Option<String> {
        let text = match tree_search::nested_document(root) {
            NestedDocument::Lite => {
                warn!("Expected data at index 3 is missing or empty, lite response");
                return None;
            }
            NestedDocument::Absent => return None,
            NestedDocument::Embedded(text) => text,
        };

        let text = payload_locator::strip_xssi_prefix(text).unwrap_or(text);
        match parse_tree(text) {
            Ok(inner) => tree_search::find_website(&inner).map(str::to_string),
            Err(e) => {
                warn!("Nested document is not valid JSON, ignoring: {}", e);
                None
            }
        }
    }
}

/// 解析 JSON 文本为数据树
///
/// 不限制嵌套深度，深层数组只在搜索时按深度上限截断；
/// 解析时按需扩展栈空间
fn parse_tree(text: &str) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}
