// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;

/// 递归搜索的最大深度，超过后该分支视为未找到
pub const MAX_DEPTH: usize = 50;

/// 谷歌自身地图与资源域名，不能当作商家网站
pub const DENYLIST: [&str; 3] = ["google.com/maps", "google.com/local", "ggpht.com"];

/// 顶层数组中内嵌子文档所在的下标
const NESTED_INDEX: usize = 3;
/// 子文档数组中 JSON 字符串所在的下标
const NESTED_DOCUMENT_INDEX: usize = 6;

/// 在数据树中查找网站地址
///
/// 深度优先、从左到右遍历，遇到第一个匹配立即返回。
/// 匹配形状为 `["http(s)://...", "<文本>", ...]`，且地址不在黑名单中
///
/// # 参数
///
/// * `root` - 解析后的数据树
///
/// # 返回值
///
/// 找到的网站地址，未找到时为 `None`
pub fn find_website(root: &Value) -> Option<&str> {
    search(root, 0)
}

fn search(node: &Value, depth: usize) -> Option<&str> {
    if depth > MAX_DEPTH {
        return None;
    }

    match node {
        Value::Array(items) => direct_match(items)
            .or_else(|| items.iter().find_map(|item| search(item, depth + 1))),
        Value::Object(map) => map.values().find_map(|value| search(value, depth + 1)),
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => None,
    }
}

fn direct_match(items: &[Value]) -> Option<&str> {
    match items {
        [Value::String(url), Value::String(_), ..] if is_website_url(url) => Some(url.as_str()),
        _ => None,
    }
}

/// 判断字符串是否为可接受的网站地址
pub fn is_website_url(url: &str) -> bool {
    (url.starts_with("http://") || url.starts_with("https://"))
        && !DENYLIST.iter().any(|denied| url.contains(denied))
}

/// 顶层数据中内嵌子文档的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestedDocument<'a> {
    /// 下标 3 缺失、为空或为假值，通常是精简页面
    Lite,
    /// 没有可用的子文档
    Absent,
    /// 下标 `[3][6]` 处的 JSON 字符串
    Embedded(&'a str),
}

/// 查找顶层数组 `[3][6]` 处的内嵌 JSON 字符串
pub fn nested_document(root: &Value) -> NestedDocument<'_> {
    let Value::Array(items) = root else {
        return NestedDocument::Absent;
    };

    match items.get(NESTED_INDEX) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => NestedDocument::Lite,
        Some(Value::Array(inner)) if inner.is_empty() => NestedDocument::Lite,
        Some(Value::String(text)) if text.is_empty() => NestedDocument::Lite,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => NestedDocument::Lite,
        Some(Value::Array(inner)) => match inner.get(NESTED_DOCUMENT_INDEX) {
            Some(Value::String(text)) if !text.is_empty() => NestedDocument::Embedded(text.as_str()),
            _ => NestedDocument::Absent,
        },
        Some(_) => NestedDocument::Absent,
    }
}
