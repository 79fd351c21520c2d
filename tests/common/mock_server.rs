//! Mock directory server for integration tests
//!
//! wiremock is async; the directory client is blocking and must not run
//! inside a runtime. `DirectoryMock` owns a runtime used only to start the
//! server and mount mocks, so tests themselves stay plain `#[test]`s.

use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request};

pub struct DirectoryMock {
    runtime: Runtime,
    server: MockServer,
}

impl DirectoryMock {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("test runtime");
        let server = runtime.block_on(MockServer::start());
        Self { runtime, server }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn received_requests(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    /// Received requests whose path ends with `suffix`
    pub fn requests_to(&self, suffix: &str) -> Vec<Request> {
        self.received_requests()
            .into_iter()
            .filter(|r| r.url.path().ends_with(suffix))
            .collect()
    }
}
