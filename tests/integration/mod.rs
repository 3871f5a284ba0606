//! Integration tests for the status server.
//!
//! Each test binds a real TCP listener on a loopback port and talks to the
//! server over HTTP with `reqwest`.

use std::net::SocketAddr;
use std::sync::Arc;

use cicd_status_server::config::Config;
use cicd_status_server::error::ProbeError;
use cicd_status_server::probe::{HostProbe, MetricsProbe, MockProbe};
use cicd_status_server::server::Server;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Running server handle; the server stops when this is dropped.
struct TestServer {
    addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

async fn spawn_server(config: Config, probe: Arc<dyn MetricsProbe>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    let server = Server::with_probe(config, probe);
    tokio::spawn(async move {
        server
            .serve(listener, async move {
                let _ = rx.await;
            })
            .await
    });

    TestServer {
        addr,
        _shutdown: tx,
    }
}

#[tokio::test]
async fn test_status_endpoint() {
    let server = spawn_server(Config::default(), Arc::new(MockProbe::new())).await;

    let response = reqwest::get(server.url("/status")).await.unwrap();
    assert_eq!(response.status(), 200);

    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["code"], 200);
    assert_eq!(json["message"], "Service is running normally");
}

#[tokio::test]
async fn test_status_body_is_stable() {
    let server = spawn_server(Config::default(), Arc::new(MockProbe::new())).await;

    let first = reqwest::get(server.url("/status")).await.unwrap().bytes().await.unwrap();
    let second = reqwest::get(server.url("/status")).await.unwrap().bytes().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_index_endpoint() {
    let server = spawn_server(Config::default(), Arc::new(MockProbe::new())).await;

    let response = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );

    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["application"], "Python CI/CD Demo");
    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["status"], "operational");
    assert_eq!(json["environment"], "production");
    assert!(json["server_time"].is_string());
    assert!(!json["host"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_environment_override() {
    let config = Config::from_vars([("ENV", "staging")]).unwrap();
    let server = spawn_server(config, Arc::new(MockProbe::new())).await;

    let json: serde_json::Value = reqwest::get(server.url("/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["environment"], "staging");
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_health_endpoint_on_host() {
    let server = spawn_server(Config::default(), Arc::new(HostProbe::new())).await;

    let response = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(response.status(), 200);

    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["status"], "healthy");
    assert!(json["system_metrics"]["memory_available_gb"].as_f64().unwrap() >= 0.0);
    assert!(json["system_metrics"]["disk_free_gb"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_health_endpoint_with_injected_fault() {
    let probe = MockProbe::failing(ProbeError::DiskNotFound("/".into()));
    let server = spawn_server(Config::default(), Arc::new(probe)).await;

    let response = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(response.status(), 500);

    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["error"], "no filesystem mounted at /");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_path() {
    let server = spawn_server(Config::default(), Arc::new(MockProbe::new())).await;

    let response = reqwest::get(server.url("/nope")).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_server_binds_configured_port() {
    // Reserve a free port, release it, then ask the server to bind it via config.
    let port = {
        let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        probe.local_addr().unwrap().port()
    };
    let config = Config::from_vars([("PORT", port.to_string())]).unwrap();
    let server = Server::with_probe(config, Arc::new(MockProbe::new()));
    assert_eq!(server.addr().port(), port);

    let listener = TcpListener::bind(server.addr()).await.unwrap();
    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server.serve(listener, async move {
        let _ = rx.await;
    }));

    let response = reqwest::get(format!("http://127.0.0.1:{port}/status"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    drop(response);

    tx.send(()).unwrap();
    handle.await.unwrap().unwrap();
}
