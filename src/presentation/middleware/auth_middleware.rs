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

use crate::presentation::errors::AppError;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    /// 配置的共享令牌
    pub api_token: Arc<str>,
}

impl AuthState {
    pub fn new(api_token: impl Into<Arc<str>>) -> Self {
        Self {
            api_token: api_token.into(),
        }
    }
}

/// 认证中间件
///
/// 校验 `Authorization` 请求头，支持 `Bearer <token>` 与裸令牌两种形式
///
/// # 返回值
///
/// * `Ok(Response)` - 认证成功的响应
/// * `Err(AppError::Unauthorized)` - 缺少请求头
/// * `Err(AppError::Forbidden)` - 令牌不匹配
pub async fn auth_middleware(
    State(state): State<AuthState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    debug!("AuthMiddleware processing path: {}", req.uri().path());

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Authorization header missing".to_string()))?;

    let raw = auth_header
        .to_str()
        .map_err(|_| AppError::Forbidden("Invalid token".to_string()))?;
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw);

    if token != state.api_token.as_ref() {
        warn!("Rejected request with invalid token on {}", req.uri().path());
        return Err(AppError::Forbidden("Invalid token".to_string()));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
#[path = "auth_middleware_test.rs"]
mod tests;
