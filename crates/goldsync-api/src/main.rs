//! 금/환율 동기화 API 서버.
//!
//! 설정을 로드하고 Axum 서버를 시작합니다.

use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use goldsync_api::routes::create_api_router;
use goldsync_api::state::AppState;
use goldsync_core::{init_logging, AppConfig, CorsConfig, ServerConfig};

/// CORS 레이어 생성.
///
/// 허용 origin 목록이 비어 있으면 모든 origin을 허용합니다.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .allowed_origins
        .iter()
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        if !config.allowed_origins.is_empty() {
            warn!("cors.allowed_origins contains no valid origins, allowing any");
        }
        AllowOrigin::any()
    } else {
        info!("CORS configured with {} allowed origins", origins.len());
        AllowOrigin::list(origins.clone())
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
        // 와일드카드 origin과 credentials는 함께 쓸 수 없음
        .allow_credentials(!origins.is_empty())
        .max_age(Duration::from_secs(3600))
}

/// 전체 라우터 생성.
fn create_router(state: Arc<AppState>, server: &ServerConfig, cors: &CorsConfig) -> Router {
    create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            server.request_timeout(),
        ))
        .layer(cors_layer(cors))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 파일 로드 (없으면 무시)
    let _ = dotenvy::dotenv();

    let config = AppConfig::load_default()?;
    init_logging(&config.logging.clone().override_from_env())?;

    info!(
        backend = %config.backend.base_url,
        finnomena = %config.providers.finnomena_base_url,
        fx = %format!("{}/{}", config.providers.fx_from_symbol, config.providers.fx_to_symbol),
        "Starting gold sync API server"
    );
    if !config.request_timeout_covers_sync() {
        warn!(
            request_timeout_secs = config.server.request_timeout_secs,
            worst_case_secs = config.worst_case_sync_duration().as_secs(),
            "server.request_timeout_secs does not exceed the outbound call budget; slow upstreams will surface as 408"
        );
    }
    if config.backend.accept_invalid_certs {
        warn!("Backend TLS certificate verification is disabled");
    }

    let state = Arc::new(AppState::from_config(&config)?);
    let app = create_router(state, &config.server, &config.cors);

    let addr = config.server.socket_addr()?;
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown 시그널 대기 (Ctrl+C 또는 SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
