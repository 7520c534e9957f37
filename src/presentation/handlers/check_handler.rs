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

use axum::{
    extract::{rejection::JsonRejection, Extension, Json},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    application::dto::{check_request::CheckRequestDto, check_response::ApiResponse},
    domain::{models::place_check::CheckResult, services::place_check_service::PlaceCheckService},
    presentation::errors::AppError,
};

/// 检查地点网站是否属于给定域名
///
/// 查询失败（状态 4）时依旧返回 200，失败原因放在 `data.error`
pub async fn check_place(
    Extension(service): Extension<Arc<PlaceCheckService>>,
    payload: Result<Json<CheckRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<CheckResult>>), AppError> {
    let Json(payload) = payload?;
    let query = payload.validate().map_err(|e| {
        warn!("Rejected check request: {}", e);
        AppError::BadRequest(e)
    })?;

    info!("Checking place {} against {}", query.placeid, query.domain);
    let result = service.check(&query.placeid, &query.domain).await;

    Ok((StatusCode::OK, Json(ApiResponse::ok(result))))
}
