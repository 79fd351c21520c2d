//! Picker flow against a real server
//!
//! Starts the directory server on an ephemeral port, then walks the app
//! state the way the frame loop does: open the picker, get bounced to login,
//! log in, search, page to the end, select.

use std::time::{Duration, Instant};

use counterparty::backend::directory::{demo_seeds, Directory};
use counterparty::backend::server::{create_app_with_directory, ServerConfig};
use counterparty::egui_app::{AppState, Screen};
use counterparty::shared::TradeRole;
use tokio::runtime::Runtime;

use crate::common::client_config;

struct RunningServer {
    url: String,
    _runtime: Runtime,
}

fn start_server() -> RunningServer {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap();

    let config = ServerConfig {
        jwt_secret: "e2e-secret".to_string(),
        page_size: 5,
        bcrypt_cost: 4,
        ..ServerConfig::default()
    };
    let directory = Directory::from_seeds(demo_seeds(), config.page_size, config.bcrypt_cost).unwrap();
    let app = create_app_with_directory(directory, &config);

    let listener = runtime
        .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
        .unwrap();
    let addr = listener.local_addr().unwrap();
    runtime.spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    RunningServer {
        url: format!("http://{}", addr),
        _runtime: runtime,
    }
}

fn tick_until_idle(state: &mut AppState) {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        state.tick();
        if !state.is_busy() {
            return;
        }
        assert!(Instant::now() < deadline, "app did not settle");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn test_full_picker_flow() {
    let server = start_server();
    let mut state = AppState::new(client_config(&server.url, None));

    // No session yet: the first search bounces to login
    state.open_picker(TradeRole::Vente);
    state.tick();
    let picker = state.picker.as_mut().expect("picker mounted");
    picker.set_query("exemple.fr");
    picker.search();
    tick_until_idle(&mut state);
    assert_eq!(state.navigator.current(), &Screen::Login);

    state.pseudo_input = "amina".to_string();
    state.password_input = "motdepasse".to_string();
    state.handle_login();
    tick_until_idle(&mut state);
    assert!(state.auth_state.authenticated);
    assert!(state.navigator.current().is_picker());

    // 11 other accounts, 5 per page: 5 + 5 + 1, then overflow
    let picker = state.picker.as_mut().expect("picker still mounted");
    picker.search();
    tick_until_idle(&mut state);
    for _ in 0..3 {
        state.picker.as_mut().unwrap().load_more_data();
        tick_until_idle(&mut state);
    }

    let picker = state.picker.as_ref().unwrap();
    assert_eq!(picker.state().results.len(), 11);
    assert!(picker.state().end_of_list);
    assert!(picker.state().results.iter().all(|u| u.pseudo != "amina"));

    let chosen = picker.state().results[3].clone();
    state.select(&chosen);

    assert_eq!(
        state.navigator.current(),
        &Screen::VendeurSelected { role: TradeRole::Vente }
    );
    assert_eq!(state.store.achat().user.as_ref(), Some(&chosen));
}
