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

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use wallscope::application::use_cases::parse_wall_use_case::ParseWallUseCase;
use wallscope::config::settings::Settings;
use wallscope::domain::services::crawl_loop::TokioThrottle;
use wallscope::engines::reqwest_engine::ReqwestFetcher;
use wallscope::presentation::routes;
use wallscope::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting wallscope...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize fetcher and use case
    let fetcher = Arc::new(ReqwestFetcher::new(&settings.fetcher)?);
    let use_case = Arc::new(ParseWallUseCase::new(
        &settings,
        fetcher,
        Arc::new(TokioThrottle),
    )?);
    info!(
        "Crawl delay {} ms, default keywords: {:?}",
        settings.crawl.delay_ms, settings.crawl.keywords
    );

    // 4. Start HTTP server
    let app = routes::routes(use_case);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
