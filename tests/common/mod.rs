use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

pub const API_KEY: &str = "integration-secret";

const READY_TIMEOUT: Duration = Duration::from_secs(10);

/// A running `chuckie-mcp` binary on a free port. The process is killed when
/// the value is dropped, so keep it alive for the whole test.
pub struct TestServer {
    base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn(api_key: Option<&str>) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_chuckie-mcp"));
        cmd.env("MCP_HOST", "127.0.0.1")
            .env("MCP_PORT", port.to_string())
            .env("APP_ENV", "development")
            .env_remove("API_KEY_ENV_VAR")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        match api_key {
            Some(key) => cmd.env("API_KEY", key),
            None => cmd.env_remove("API_KEY"),
        };

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/mcp/v1/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

async fn start(api_key: Option<&str>) -> Result<TestServer> {
    // Bind the guard first so a readiness failure still reaps the child
    let server = TestServer::spawn(api_key)?;
    server.wait_ready(READY_TIMEOUT).await?;
    Ok(server)
}

/// Server started with `API_KEY` set to [`API_KEY`].
pub async fn spawn_server() -> Result<TestServer> {
    start(Some(API_KEY)).await
}

/// Server started without any API key in its environment.
#[allow(dead_code)]
pub async fn spawn_unconfigured_server() -> Result<TestServer> {
    start(None).await
}

pub fn bearer() -> String {
    format!("Bearer {}", API_KEY)
}
