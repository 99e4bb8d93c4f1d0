#![allow(dead_code)]

use axum_test::TestServer;
use shortly::application::services::LinkService;
use shortly::domain::entities::{Link, NewLink};
use shortly::domain::repositories::LinkRepository;
use shortly::infrastructure::memory::MemoryLinkRepository;
use shortly::routes::app_router;
use shortly::state::AppState;
use std::sync::Arc;

/// Code whose lookup panics in [`PanickingRepository`].
pub const PANIC_CODE: &str = "Panic000";

/// In-memory store whose lookup of [`PANIC_CODE`] panics.
#[derive(Default)]
pub struct PanickingRepository {
    inner: MemoryLinkRepository,
}

impl LinkRepository for PanickingRepository {
    fn insert(&self, new_link: NewLink) -> Option<Link> {
        self.inner.insert(new_link)
    }

    fn find_by_code(&self, code: &str) -> Option<Link> {
        if code == PANIC_CODE {
            panic!("lookup of {code} exploded");
        }
        self.inner.find_by_code(code)
    }

    fn count(&self) -> usize {
        self.inner.count()
    }
}

pub fn create_state_with(link_repository: Arc<dyn LinkRepository>) -> AppState {
    AppState::new(Arc::new(LinkService::new(link_repository)))
}

pub fn create_test_state() -> AppState {
    create_state_with(Arc::new(MemoryLinkRepository::new()))
}

pub fn create_test_server() -> TestServer {
    TestServer::new(app_router(create_test_state())).unwrap()
}

pub fn create_panicking_server() -> TestServer {
    let state = create_state_with(Arc::new(PanickingRepository::default()));
    TestServer::new(app_router(state)).unwrap()
}

/// Shortens `url` through the API and returns the code.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/api/shorten")
        .json(&serde_json::json!({ "url": url }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    json["data"].as_str().unwrap().to_string()
}
