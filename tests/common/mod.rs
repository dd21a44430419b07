use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/masterclass-api");
        cmd.env("MC_API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server can see DATABASE_URL from .env
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/ping", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Fresh catalog id unlikely to collide with other test runs. Negative so
/// round-trip tests sort ahead of any leftover positive rows.
#[allow(dead_code)]
pub fn unique_mc_id() -> i64 {
    -((Uuid::new_v4().as_u128() & 0x7fff_ffff_ffff_ffff) as i64).abs()
}

#[allow(dead_code)]
pub fn unique_user_id() -> String {
    format!("test-user-{}", Uuid::new_v4().simple())
}

#[allow(dead_code)]
pub fn mc_payload(id: i64) -> Value {
    json!({
        "id": id,
        "title": format!("Masterclass {}", id),
        "location": "Berlin",
        "price": 49.9,
        "website": "https://example.com/mc",
        "image_url": "https://example.com/mc.png"
    })
}

#[allow(dead_code)]
pub fn user_payload(user_id: &str) -> Value {
    json!({
        "user_id": user_id,
        "phone": "+4915112345678",
        "full_name": "Erika Mustermann",
        "telegram_nick": "@erika"
    })
}
