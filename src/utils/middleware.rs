use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// 未配置 ALLOWED_ORIGINS 时放开所有来源与方法
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let from_env: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    if !from_env.is_empty() {
        CorsLayer::new()
            .allow_origin(from_env)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
