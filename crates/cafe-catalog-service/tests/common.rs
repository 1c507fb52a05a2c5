//! Common test utilities for cafe catalog integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use cafe_catalog_service::{create_router, AppState, ServiceConfig};
use cafe_catalog_store::SqliteStore;

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
    /// The shared secret accepted by the delete route.
    pub secret_key: String,
}

impl TestHarness {
    /// Create a new test harness with a fresh database.
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let database_path = temp_dir.path().join("cafes.db");
        let store = SqliteStore::open(&database_path)
            .await
            .expect("Failed to open store");

        let secret_key = "test-secret-key".to_string();

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            database_path: database_path.to_string_lossy().to_string(),
            secret_key: secret_key.clone(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(Arc::new(store), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            _temp_dir: temp_dir,
            secret_key,
        }
    }

    /// Form fields for a valid cafe, as a browser would submit them.
    pub fn cafe_form(name: &str, location: &str) -> Vec<(&'static str, String)> {
        vec![
            ("name", name.to_string()),
            ("map_url", format!("https://maps.example/{name}")),
            ("img_url", format!("https://img.example/{name}.jpg")),
            ("location", location.to_string()),
            ("seats", "20-30".to_string()),
            ("has_toilet", "1".to_string()),
            ("has_wifi", "1".to_string()),
            ("has_sockets", "0".to_string()),
            ("can_take_calls", "0".to_string()),
            ("coffee_price", "£2.50".to_string()),
        ]
    }

    /// Add a cafe through the API, asserting success.
    pub async fn add_cafe(&self, name: &str, location: &str) {
        let response = self
            .server
            .post("/add")
            .form(&Self::cafe_form(name, location))
            .await;

        response.assert_status_ok();
    }

    /// Fetch the full catalog and return the `cafe` array.
    pub async fn list_all(&self) -> Vec<serde_json::Value> {
        let response = self.server.get("/all").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        body["cafe"]
            .as_array()
            .expect("`/all` response carries a cafe array")
            .clone()
    }

    /// The id of the only cafe in the catalog.
    pub async fn sole_cafe_id(&self) -> i64 {
        let cafes = self.list_all().await;
        assert_eq!(cafes.len(), 1, "expected exactly one cafe");
        cafes[0]["id"].as_i64().expect("cafe id is an integer")
    }
}
