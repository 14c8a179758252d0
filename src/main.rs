use std::{sync::Arc, net::{SocketAddr, IpAddr, Ipv4Addr}, str::FromStr, time::Duration};
use anyhow::{bail, Context};
use clap::Parser;
use axum::{routing::get, Router};
use axum::http::{Response, StatusCode};
use axum::body::{boxed, Body};
use handlebars::Handlebars;
use tower::{ServiceBuilder, ServiceExt};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod models;
pub mod controllers;
pub mod services;
pub mod mappers;
pub mod portfolio;
pub mod templates;
pub mod time;
pub mod typing;
pub mod validators;
#[cfg(test)]
mod test_support;

use controllers::{index, typing as typing_controller};
use services::github_service::{GitHubService, DEFAULT_API_BASE};
use typing::TypeEffect;


const DEFAULT_HANDLE: &str = "jonasnetopng";
const HERO_LINES: [&str; 2] = ["Jonas Nogueira Neto", "Front-end developer"];

// Command line interface
#[derive(Parser, Debug)]
#[clap(name="folio-page", about="A personal portfolio page backed by the GitHub API")]
struct Opt {
    #[clap(short = 'l', long = "log", default_value = "debug")]
    log_level: String,

    #[clap(short = 'a', long = "addr", default_value = "::1")]
    addr: String,

    #[clap(short = 'p', long = "port", default_value = "8080")]
    port: u16,

    #[clap(long = "static_dir", default_value = "static")]
    static_dir: String,

    #[clap(long = "handle", default_value = DEFAULT_HANDLE)]
    handle: String,

    #[clap(long = "api_base", default_value = DEFAULT_API_BASE)]
    api_base: String,

    #[clap(long = "typing_delay_ms", default_value = "100")]
    typing_delay_ms: u64,
}

pub struct AppState {
    registry: Handlebars<'static>,
    github_service: GitHubService,
    hero: TypeEffect,
}

impl AppState {
    fn new(handle: &str, api_base: &str, typing_delay: Duration) -> anyhow::Result<Self> {
        if !validators::is_github_handle(handle) {
            bail!("{:?} is not a valid GitHub handle", handle);
        }
        let hero_lines: &[&str] = &HERO_LINES;
        Ok(AppState {
            registry: templates::registry().context("Failed to register templates")?,
            github_service: GitHubService::new(api_base, handle).context("Failed to build HTTP client")?,
            hero: TypeEffect::new(hero_lines, typing_delay).context("Invalid typing effect")?,
        })
    }
}

// Setup controller routes and inject app state
fn app(state: Arc<AppState>, static_dir: String) -> Router {
    Router::new()
        .route("/", get(index::get_index))
        .route("/typing", get(typing_controller::get_typing))
        .fallback_service(get(|req| async move {
            match ServeDir::new(static_dir).oneshot(req).await {
                Ok(res) => res.map(boxed),
                Err(err) => Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(boxed(Body::from(format!("error: {err}"))))
                    .expect("error response"),
            }
        }))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Fetch console arguments
    let opt = Opt::parse();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{},hyper=info,mio=info", opt.log_level));
    }
    // Enable console logging
    tracing_subscriber::fmt::init();

    let app_state = Arc::new(AppState::new(
        &opt.handle,
        &opt.api_base,
        Duration::from_millis(opt.typing_delay_ms),
    )?);
    log::info!("Serving portfolio of {} from {}", opt.handle, opt.api_base);
    let app = app(app_state, opt.static_dir);

    let sock_addr = SocketAddr::from((
        IpAddr::from_str(opt.addr.as_str()).unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        opt.port
    ));
    log::info!("Now listening on http://{}", sock_addr);

    axum::Server::try_bind(&sock_addr)
        .with_context(|| format!("Failed to bind {}", sock_addr))?
        .serve(app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
