//! Real-socket tests: the serve loop with concurrent HTTP clients.

use std::net::SocketAddr;

use records_service::error::ServerError;
use records_service::server::{
    bind, create_router, serve, AppState, QueryAllResponse, WriteResponse,
};
use records_service::storage::SqliteStorage;
use tempfile::TempDir;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct LiveServer {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    task: JoinHandle<Result<(), ServerError>>,
    _temp_dir: TempDir,
}

async fn start_server() -> LiveServer {
    let temp_dir = TempDir::new().unwrap();
    let storage = SqliteStorage::new(temp_dir.path().join("live.db"))
        .await
        .unwrap();
    let router = create_router(AppState::new(storage));

    let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop, stopped) = oneshot::channel::<()>();
    let task = tokio::spawn(serve(listener, router, async move {
        let _ = stopped.await;
    }));

    LiveServer {
        addr,
        stop,
        task,
        _temp_dir: temp_dir,
    }
}

#[tokio::test]
async fn test_concurrent_clients_get_distinct_ids() {
    let server = start_server().await;
    let client = reqwest::Client::new();
    let n = 32;

    let requests: Vec<_> = (0..n)
        .map(|i| {
            let client = client.clone();
            let url = format!("http://{}/write", server.addr);
            tokio::spawn(async move {
                client
                    .post(url)
                    .body(serde_json::json!({ "value": format!("client-{i}") }).to_string())
                    .send()
                    .await
                    .unwrap()
                    .json::<WriteResponse>()
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut ids = Vec::with_capacity(n);
    for request in requests {
        ids.push(request.await.unwrap().id);
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), n);

    let listed: QueryAllResponse = client
        .get(format!("http://{}/query/all", server.addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.total, n);

    server.stop.send(()).unwrap();
    server.task.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_live_method_not_allowed_is_plain_text() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/write", server.addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 405);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(response.text().await.unwrap(), "only POST requests are supported");

    server.stop.send(()).unwrap();
    server.task.await.unwrap().unwrap();
}
