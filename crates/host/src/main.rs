use std::net::TcpListener;

use axum::{
    body::Body,
    extract::Path,
    http::{header, Response, StatusCode},
    routing::get,
    Router,
};
use merke_host::config::Config;
use merke_host::embedded;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_banner() {
    eprintln!();
    eprintln!("  \x1b[1;36mmerke-hero\x1b[0m v{VERSION}");
    eprintln!("  \x1b[2mThe Merke.am landing page, served from one binary.\x1b[0m");
    eprintln!();
}

fn print_connection_info(http_port: u16, bind: &str) {
    eprintln!("  \x1b[1;32m[http]\x1b[0m  Serving on port \x1b[1;96m{http_port}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[1;37m>\x1b[0m Open: \x1b[4;96mhttp://{bind}:{http_port}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[2mPress Ctrl+C to stop\x1b[0m");
    eprintln!();
}

/// Graceful start: Check if port is available
fn check_port_available(bind: &str, port: u16) -> bool {
    TcpListener::bind(format!("{bind}:{port}")).is_ok()
}

/// Graceful start: Find available port starting from default
fn find_available_port(bind: &str, start: u16) -> Option<u16> {
    (start..start + 10).find(|&port| check_port_available(bind, port))
}

/// Serve an embedded static file, falling back to index.html so deep links
/// land on the page.
async fn serve_static(Path(path): Path<String>) -> Response<Body> {
    match embedded::get_asset(&path) {
        Some((data, mime)) => {
            // Use application/javascript for .js files (override detected mime)
            let content_type = if std::path::Path::new(&path)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("js"))
            {
                "application/javascript"
            } else {
                mime
            };

            asset_response(StatusCode::OK, content_type, data)
        }
        None => embedded::get_asset("index.html").map_or_else(
            || {
                Response::builder()
                    .status(StatusCode::NOT_FOUND)
                    .body(Body::from("Not Found"))
                    .unwrap()
            },
            |(data, mime)| asset_response(StatusCode::OK, mime, data),
        ),
    }
}

/// Serve index.html at root
async fn serve_index() -> Response<Body> {
    embedded::get_asset("index.html").map_or_else(
        || {
            Response::builder()
                .status(StatusCode::NOT_FOUND)
                .body(Body::from("index.html not found"))
                .unwrap()
        },
        |(data, mime)| asset_response(StatusCode::OK, mime, data),
    )
}

async fn healthz() -> &'static str {
    "ok"
}

fn asset_response(status: StatusCode, content_type: &str, data: Vec<u8>) -> Response<Body> {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(data))
        .unwrap()
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "merke_host=info".into()),
        )
        .init();

    print_banner();

    let config = Config::load();
    let http_port = if check_port_available(&config.bind, config.http_port) {
        config.http_port
    } else {
        let fallback = find_available_port(&config.bind, config.http_port)
            .ok_or_else(|| anyhow::anyhow!("no free port near {}", config.http_port))?;
        warn!(
            "port {} busy, falling back to {}",
            config.http_port, fallback
        );
        fallback
    };

    let app = Router::new()
        .route("/", get(serve_index))
        .route("/healthz", get(healthz))
        .route("/*path", get(serve_static))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any));

    let addr = format!("{}:{}", config.bind, http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    print_connection_info(http_port, &config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("bye");
    Ok(())
}
