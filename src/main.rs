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

use placecheck::config::settings::Settings;
use placecheck::domain::services::place_check_service::PlaceCheckService;
use placecheck::engines::reqwest_engine::ReqwestFetcher;
use placecheck::engines::traits::Fetcher;
use placecheck::presentation::middleware::auth_middleware::AuthState;
use placecheck::presentation::routes;
use placecheck::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env before anything reads the environment
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    // 2. Initialize logging
    telemetry::init_telemetry();
    info!("Starting placecheck...");

    // 3. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");
    if settings.uses_default_token() {
        warn!("Using the default API token, set API_TOKEN or PLACECHECK__AUTH__API_TOKEN");
    }

    // 4. Initialize fetcher and service
    let fetcher: Arc<dyn Fetcher> = Arc::new(ReqwestFetcher::new(&settings.fetcher)?);
    info!("Fetcher {} initialized", fetcher.name());
    let service = Arc::new(PlaceCheckService::new(fetcher, settings.fetcher.clone()));
    let auth_state = AuthState::new(settings.auth.api_token.as_str());

    // 5. Start HTTP server
    let app = routes::routes(service, auth_state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
