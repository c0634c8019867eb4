use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use product_api::{app, auth, config::AppConfig, database, AppState};

/// In-process test harness: the full router over an in-memory SQLite pool.
pub struct TestApp {
    router: Router,
    state: AppState,
}

impl TestApp {
    pub async fn spawn() -> Result<Self> {
        let config = AppConfig {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "test-secret".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            token_ttl_hours: 1,
        };

        // A single connection keeps every request on the same in-memory db
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&config.database_url)
            .await
            .context("failed to open in-memory database")?;

        database::init_schema(&pool).await.context("failed to create schema")?;

        let state = AppState::new(pool, config);
        let router = app(state.clone());

        Ok(Self { router, state })
    }

    /// A token signed with this app's configured secret.
    pub fn token(&self) -> String {
        auth::issue(&self.state.config).expect("token issuance")
    }

    /// A syntactically valid token signed with a different secret.
    pub fn foreign_token(&self) -> String {
        let mut config = (*self.state.config).clone();
        config.jwt_secret = "some-other-secret".to_string();
        auth::issue(&config).expect("token issuance")
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))?,
            None => builder.body(Body::empty())?,
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("request failed")?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).context("response was not JSON")?
        };

        Ok((status, json))
    }
}
