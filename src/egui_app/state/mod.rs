use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

use crate::egui_app::api::{ApiError, DirectoryApi, DirectoryApiClient};
use crate::egui_app::navigation::Navigator;
use crate::egui_app::search::SearchController;
use crate::egui_app::selection;
use crate::egui_app::store::Store;
use crate::egui_app::types::Screen;
use crate::egui_app::{login, AuthState, Config};
use crate::shared::{AuthResponse, TradeRole, User};

pub type LoginResult = Result<AuthResponse, ApiError>;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub api: Arc<dyn DirectoryApi>,
    pub navigator: Navigator,
    pub store: Store,
    /// Present while a `ChoixVendeur` screen is on the navigation stack
    pub picker: Option<SearchController>,
    pub auth_state: AuthState,
    pub pseudo_input: String,
    pub password_input: String,
    pub auth_result: Option<Receiver<LoginResult>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let api: Arc<dyn DirectoryApi> = Arc::new(DirectoryApiClient::new(config.clone()));
        Self::with_api(config, api)
    }

    pub fn with_api(config: Config, api: Arc<dyn DirectoryApi>) -> Self {
        tracing::info!("AppState initialized against {}", config.server_url());
        Self {
            config,
            api,
            navigator: Navigator::default(),
            store: Store::new(),
            picker: None,
            auth_state: AuthState::new(),
            pseudo_input: String::new(),
            password_input: String::new(),
            auth_result: None,
        }
    }

    /// Per-frame housekeeping: finished logins, picker mount/unmount,
    /// finished searches.
    pub fn tick(&mut self) {
        self.check_auth_result();
        self.sync_picker();
        if let Some(picker) = self.picker.as_mut() {
            picker.poll(&mut self.navigator);
        }
    }

    /// Whether background work is pending (the UI keeps repainting)
    pub fn is_busy(&self) -> bool {
        self.auth_result.is_some() || self.picker.as_ref().is_some_and(SearchController::is_busy)
    }

    pub fn open_picker(&mut self, role: TradeRole) {
        let screen = match role {
            TradeRole::Achat => Screen::picker_for_purchase(),
            TradeRole::Vente => Screen::picker_for_sale(),
        };
        self.navigator.navigate(screen);
        self.sync_picker();
    }

    /// Row tapped on the visible picker
    pub fn select(&mut self, user: &User) {
        let params = match self.navigator.current() {
            Screen::ChoixVendeur { params } => params.clone(),
            _ => None,
        };
        selection::selected(user, params.as_ref(), &mut self.store, &mut self.navigator);
    }

    pub fn go_back(&mut self) {
        self.navigator.go_back();
        self.sync_picker();
    }

    /// Mount a fresh controller when a picker enters the stack, drop it
    /// when the last picker leaves.
    fn sync_picker(&mut self) {
        match (self.navigator.mounted_picker().is_some(), self.picker.is_some()) {
            (true, false) => {
                tracing::debug!("mounting picker");
                self.picker = Some(SearchController::new(Arc::clone(&self.api)));
            }
            (false, true) => {
                tracing::debug!("unmounting picker");
                self.picker = None;
            }
            _ => {}
        }
    }

    pub fn check_auth_result(&mut self) {
        let Some(rx) = self.auth_result.as_ref() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.auth_result = None;
                self.auth_state.loading = false;
                self.auth_state.set_error("Connexion interrompue".to_string());
                return;
            }
        };
        self.auth_result = None;
        self.auth_state.loading = false;

        match result {
            Ok(auth) => {
                tracing::info!("Authentication successful: {}", auth.user.pseudo);
                self.set_session(Some(auth.token));
                self.auth_state.authenticated = true;
                self.auth_state.user = Some(auth.user);
                self.auth_state.error = None;
                self.password_input.clear();
                if !self.navigator.go_back() {
                    self.navigator.reset(Screen::Landing);
                }
            }
            Err(e) => {
                tracing::warn!("Authentication failed: {}", e);
                self.auth_state.set_error(e.to_string());
            }
        }
    }

    pub fn handle_login(&mut self) {
        if self.pseudo_input.is_empty() || self.password_input.is_empty() {
            self.auth_state
                .set_error("Identifiant et mot de passe requis".to_string());
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let pseudo = self.pseudo_input.clone();
        let password = self.password_input.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(login(&config, pseudo, password));
        });

        self.auth_result = Some(rx);
    }

    pub fn logout(&mut self) {
        self.set_session(None);
        self.auth_state = AuthState::new();
        self.pseudo_input.clear();
        self.password_input.clear();
        self.navigator.reset(Screen::Landing);
        self.sync_picker();
    }

    /// Store (or clear) the bearer token and rebuild the API client with it
    fn set_session(&mut self, token: Option<String>) {
        self.config.set_token(token);
        self.api = Arc::new(DirectoryApiClient::new(self.config.clone()));
        if let Some(picker) = self.picker.as_mut() {
            picker.set_api(Arc::clone(&self.api));
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::new())
    }
}
