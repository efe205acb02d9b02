#![allow(dead_code)]

use httpmock::MockServer;
use livesale_rs::{ApiError, LsClient, ResultChannel, StaticDataFuture, StaticDataService};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use std::{fs, path::Path};
use url::Url;

pub fn fixture(endpoint: &str, sale: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, sale, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> LsClient {
    LsClient::builder()
        .base_url(Url::parse(&server.url("/graphql")).unwrap())
        .access_token("test-token")
        .user_id("user-1")
        .build()
        .unwrap()
}

/// Waits for the channel with a bound so a broken fetch fails the test instead of hanging it.
pub async fn outcome_of<T: Send + Sync + 'static>(channel: &ResultChannel<T>) -> Arc<T> {
    tokio::time::timeout(Duration::from_secs(5), channel.recv())
        .await
        .expect("channel was not filled within 5s")
}

/// Instruction for how the mock service answers.
#[derive(Clone)]
pub enum MockBehavior {
    /// Succeed with this raw body.
    Body(String),
    /// Fail with `ApiError::Other(msg)`.
    Fail(String),
    /// Never answer.
    Hang,
}

/// In-memory `StaticDataService` that records the ids it was asked for.
pub struct MockService {
    behavior: MockBehavior,
    calls: AtomicUsize,
    last_id: std::sync::Mutex<Option<String>>,
}

impl MockService {
    pub fn new(behavior: MockBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_id: std::sync::Mutex::new(None),
        })
    }

    pub fn body(body: impl Into<String>) -> Arc<Self> {
        Self::new(MockBehavior::Body(body.into()))
    }

    pub fn fail(msg: impl Into<String>) -> Arc<Self> {
        Self::new(MockBehavior::Fail(msg.into()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_id(&self) -> Option<String> {
        self.last_id.lock().unwrap().clone()
    }
}

impl StaticDataService for MockService {
    fn fetch_static_data<'a>(&'a self, sale_id: &'a str) -> StaticDataFuture<'a> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_id.lock().unwrap() = Some(sale_id.to_string());
        let behavior = self.behavior.clone();
        Box::pin(async move {
            // Answer from a later poll so the caller always sees an empty channel first.
            tokio::task::yield_now().await;
            match behavior {
                MockBehavior::Body(body) => Ok(body),
                MockBehavior::Fail(msg) => Err(ApiError::Other(msg)),
                MockBehavior::Hang => std::future::pending().await,
            }
        })
    }
}

#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_tracing() {}
