// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 负载定位（payload_locator）：从原始响应中找出内嵌 JSON 文本
/// - 树搜索（tree_search）：在解析后的数据树中查找网站地址
/// - 提取服务（extraction_service）：串联定位、解析、搜索并分类结果
/// - 域名匹配（domain_matcher）：判断网站是否属于给定域名
/// - 地点检查服务（place_check_service）：抓取页面并生成检查结果
pub mod domain_matcher;
pub mod extraction_service;
pub mod payload_locator;
pub mod place_check_service;
pub mod tree_search;
