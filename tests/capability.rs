use nudger::{Connection, ConnectionConfig, Driver, LogPolicy, Nudge, SqlDriver, LIVENESS_QUERY};

/// A client the crate knows nothing about, nudged through the public traits.
struct Flaky {
    healthy: bool,
    seen: Vec<String>,
}

#[axum::async_trait]
impl Connection for Flaky {
    async fn execute(&mut self, query: &str) -> anyhow::Result<()> {
        self.seen.push(query.to_string());
        if self.healthy {
            Ok(())
        } else {
            Err(anyhow::anyhow!("connection reset"))
        }
    }

    async fn disconnect(self) {}
}

#[tokio::test]
async fn should_nudge_foreign_connection() {
    let config = ConnectionConfig::new("", "", "", LogPolicy::OnNudge);

    let mut healthy = Flaky {
        healthy: true,
        seen: Vec::new(),
    };
    assert!(healthy.nudge(&config).await);
    assert_eq!(healthy.seen, vec![LIVENESS_QUERY.to_string()]);

    let mut broken = Flaky {
        healthy: false,
        seen: Vec::new(),
    };
    assert!(!nudger::nudge(&mut broken, &config).await);
    assert_eq!(broken.seen.len(), 1);
    broken.disconnect().await;
}

#[tokio::test]
async fn should_nudge_sql_connection_repeatedly() {
    let config = ConnectionConfig::new("sqlite::memory:", "", "", LogPolicy::OnError);
    let driver = SqlDriver::default();
    let mut connection = driver
        .connect(&config.data_source, &config.username, &config.password)
        .await
        .unwrap();

    for _ in 0..3 {
        assert!(connection.nudge(&config).await);
    }

    connection.disconnect().await;
}
