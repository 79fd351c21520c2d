//! Test fixtures
//!
//! Users, client configuration, and a poll loop for the picker controller.

use std::time::{Duration, Instant};

use counterparty::egui_app::{Config, Navigator, SearchController};
use counterparty::shared::{AppConfig, User};
use uuid::Uuid;

/// A user with a predictable name
pub fn user(pseudo: &str) -> User {
    User {
        id: Uuid::new_v4(),
        pseudo: pseudo.to_string(),
        firstname: pseudo.to_string(),
        lastname: "Test".to_string(),
        photo: None,
    }
}

/// `count` users named `<prefix>0`, `<prefix>1`, ...
pub fn users(prefix: &str, count: usize) -> Vec<User> {
    (0..count).map(|i| user(&format!("{}{}", prefix, i))).collect()
}

/// Client config pointing at `server_url`, optionally logged in
pub fn client_config(server_url: &str, token: Option<&str>) -> Config {
    let builder = AppConfig::builder().server_url(server_url.to_string());
    let mut config = Config::with_builder(builder).expect("valid test server URL");
    config.set_token(token.map(str::to_string));
    config
}

/// Poll the controller until nothing is in flight
pub fn settle(controller: &mut SearchController, navigator: &mut Navigator) {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        controller.poll(navigator);
        if !controller.is_busy() {
            return;
        }
        assert!(Instant::now() < deadline, "controller did not settle");
        std::thread::sleep(Duration::from_millis(5));
    }
}
