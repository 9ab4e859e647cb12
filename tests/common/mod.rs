use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use sanctuary_api::routes;
use sanctuary_api::state::AppState;
use sanctuary_api::store::MemoryStore;

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Bind the app on a free port over a fresh in-memory store. Each test
    /// spawns its own server so no state leaks between tests.
    pub async fn spawn() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let addr = format!("127.0.0.1:{}", port);

        let app = routes::app(AppState::new(Arc::new(MemoryStore::new())));
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server");
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Register a fresh user with the given role and log in, returning a
    /// bearer token for it.
    #[allow(dead_code)]
    pub async fn token_for(&self, username: &str, role: &str) -> Result<String> {
        let register = self
            .client
            .post(self.url("/api/auth/register"))
            .json(&json!({
                "username": username,
                "email": format!("{}@sanctuary.test", username),
                "password": "wildlife-pass",
                "role": role,
            }))
            .send()
            .await?;
        anyhow::ensure!(
            register.status().is_success(),
            "registration for {} failed: {}",
            username,
            register.status()
        );

        let login: Value = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&json!({
                "username": username,
                "password": "wildlife-pass",
            }))
            .send()
            .await?
            .json()
            .await?;

        login["token"]
            .as_str()
            .map(str::to_string)
            .context("login response missing token")
    }
}
