use inquiry_service::config::{CommonConfig, InquiryConfig, MongoConfig};
use inquiry_service::services::InquiryDb;
use inquiry_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: InquiryDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // Use random port for testing (port 0)
        let config = InquiryConfig {
            common: CommonConfig { port: 0 },
            mongodb: MongoConfig {
                uri: std::env::var("TEST_MONGODB_URI")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
                database: format!("inquiry_test_{}", Uuid::new_v4()),
                server_selection_timeout_ms: 1500,
            },
        };

        Self::spawn_with_config(config).await
    }

    /// Spawn against an address nothing listens on, for degraded-path
    /// tests. The short timeout keeps those tests fast.
    pub async fn spawn_without_database() -> Self {
        let config = InquiryConfig {
            common: CommonConfig { port: 0 },
            mongodb: MongoConfig {
                uri: "mongodb://127.0.0.1:1".to_string(),
                database: "inquiry_test_unreachable".to_string(),
                server_selection_timeout_ms: 500,
            },
        };

        Self::spawn_with_config(config).await
    }

    async fn spawn_with_config(config: InquiryConfig) -> Self {
        let db_name = config.mongodb.database.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept requests by polling the welcome
        // route, which never touches the database.
        let client = reqwest::Client::new();
        let url = format!("http://127.0.0.1:{}/", port);
        for _ in 0..50 {
            if client.get(&url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Probe MongoDB. Tests that need live storage check this first and
    /// skip when no server is reachable.
    pub async fn database_available(&self) -> bool {
        self.db.health_check().await.is_ok()
    }

    /// Cleanup test resources (drops the per-test database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
