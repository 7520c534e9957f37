// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 判断网站地址是否属于给定域名
///
/// 不区分大小写的子串匹配，不解析协议和主机，也不识别公共后缀。
/// 因此 `example.com` 同样会匹配 `notexample.com` 或路径中出现的域名
pub fn domain_matches(website: Option<&str>, domain: &str) -> bool {
    match website {
        Some(website) if !website.is_empty() && !domain.is_empty() => website
            .to_lowercase()
            .contains(&domain.to_lowercase()),
        _ => false,
    }
}
