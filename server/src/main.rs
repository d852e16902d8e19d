use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::route::BookRouter;
use error_stack::{Report, ResultExt};
use kernel::KernelError;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod controller;
mod error;
mod handler;
mod request;
mod response;
mod route;

const SERVER_PORT: &str = "SERVER_PORT";
const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "driver=debug,server=debug,tower_http=debug".into()
                    }),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let port = server_port()?;
    let app = AppModule::init().await?;

    let router = axum::Router::new()
        .route_book()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new())
        .with_state(app);

    let bind = SocketAddr::from(([0, 0, 0, 0], port));
    let tcp = TcpListener::bind(bind)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen tcp")?;
    tracing::info!("listening on {bind}");

    axum::serve(tcp, router.into_make_service())
        .await
        .change_context_lazy(|| KernelError::Internal)?;

    Ok(())
}

fn server_port() -> error_stack::Result<u16, KernelError> {
    read_port(SERVER_PORT)
}

fn read_port(key: &str) -> error_stack::Result<u16, KernelError> {
    match dotenvy::var(key) {
        Ok(port) => port
            .parse::<u16>()
            .change_context_lazy(|| KernelError::Configuration)
            .attach_printable_lazy(|| format!("`{key}` is not a port number: {port}")),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(DEFAULT_PORT),
        Err(e) => Err(Report::new(e).change_context(KernelError::Configuration)),
    }
}
