use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};


/// Canned GitHub API served from 127.0.0.1 on a free port.
pub struct StubApi {
    repos: (StatusCode, Value),
    user: (StatusCode, Value),
}

pub struct RunningStub {
    pub base: String,
    hits: Arc<AtomicUsize>,
}

impl RunningStub {
    /// Requests served so far, across both routes.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl StubApi {
    pub fn new() -> Self {
        StubApi {
            repos: (StatusCode::OK, json!([])),
            user: (StatusCode::OK, json!({})),
        }
    }

    pub fn repos(mut self, status: u16, body: Value) -> Self {
        self.repos = (StatusCode::from_u16(status).unwrap(), body);
        self
    }

    pub fn user(mut self, status: u16, body: Value) -> Self {
        self.user = (StatusCode::from_u16(status).unwrap(), body);
        self
    }

    pub async fn spawn(self) -> RunningStub {
        let hits = Arc::new(AtomicUsize::new(0));
        let (repos, user) = (self.repos, self.user);
        let repos_hits = hits.clone();
        let user_hits = hits.clone();

        let app = Router::new()
            .route("/users/:handle/repos", get(move || {
                repos_hits.fetch_add(1, Ordering::SeqCst);
                let (status, body) = repos.clone();
                async move { (status, Json(body)) }
            }))
            .route("/users/:handle", get(move || {
                user_hits.fetch_add(1, Ordering::SeqCst);
                let (status, body) = user.clone();
                async move { (status, Json(body)) }
            }));

        let base = serve(app).await;
        RunningStub { base, hits }
    }
}

/// Serves `app` on a free local port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    format!("http://{}", addr)
}

/// A list of `count` repositories with ids and names numbered from 1.
pub fn numbered_repos(count: u64) -> Value {
    Value::Array(
        (1..=count)
            .map(|i| json!({
                "id": i,
                "name": format!("repo-{}", i),
                "description": format!("Project number {}", i),
                "html_url": format!("https://github.com/octo/repo-{}", i),
                "homepage": "",
                "created_at": "2023-03-05T12:00:00Z",
            }))
            .collect(),
    )
}
