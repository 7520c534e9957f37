// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 成功响应外层结构
///
/// 查询本身失败（状态 4）时仍使用该结构返回 200，失败原因在 `data.error` 中
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// 请求处理是否成功
    pub success: bool,
    /// 响应数据
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
}
