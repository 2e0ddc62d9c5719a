/// Minimal HTTP/1.1 server for exercising the TMDB client against canned responses
///
/// Routes match on the request path only; the query string is recorded so tests
/// can assert on the parameters the client sent.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl StubResponse {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::raw(status, &body.to_string())
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Default)]
pub struct HttpStubBuilder {
    routes: HashMap<String, StubResponse>,
}

impl HttpStubBuilder {
    pub fn route(mut self, path: &str, response: StubResponse) -> Self {
        self.routes.insert(path.to_string(), response);
        self
    }

    pub async fn start(self) -> HttpStub {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        let routes = Arc::new(self.routes);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let requests = requests.clone();
            tokio::spawn(async move {
                while let Ok((stream, _)) = listener.accept().await {
                    let routes = routes.clone();
                    let requests = requests.clone();
                    tokio::spawn(async move {
                        let _ = serve(stream, &routes, &requests).await;
                    });
                }
            })
        };

        HttpStub {
            base_url: format!("http://{}", addr),
            requests,
            handle,
        }
    }
}

pub struct HttpStub {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl HttpStub {
    pub fn builder() -> HttpStubBuilder {
        HttpStubBuilder::default()
    }

    /// Base url to hand to `ProviderConfig::with_base_url`, e.g. `http://127.0.0.1:4567/3`.
    pub fn base_url(&self) -> String {
        format!("{}/3", self.base_url)
    }

    /// Request targets received so far (path plus query).
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for HttpStub {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(
    mut stream: TcpStream,
    routes: &HashMap<String, StubResponse>,
    requests: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    requests.lock().unwrap().push(target.clone());

    let path = target.split('?').next().unwrap_or("/");
    let response = routes
        .get(path)
        .cloned()
        .unwrap_or_else(|| StubResponse::json(404, serde_json::json!({
            "status_code": 34,
            "status_message": "The resource you requested could not be found.",
            "success": false
        })));

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    let reply = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json;charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        if response.status < 400 { "OK" } else { "Error" },
        response.body.len(),
        response.body
    );
    stream.write_all(reply.as_bytes()).await?;
    stream.shutdown().await
}
