//! Shared Store
//!
//! Cross-screen state. Screens never write it directly; they dispatch
//! actions, and `dispatch` is the only place the state changes.

use crate::shared::User;

/// State of an offer being prepared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AchatState {
    /// Counterparty chosen on the picker
    pub user: Option<User>,
}

/// Actions accepted by the `achat` slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AchatAction {
    SetUser(User),
    Reset,
}

impl AchatState {
    fn reduce(&mut self, action: AchatAction) {
        match action {
            AchatAction::SetUser(user) => self.user = Some(user),
            AchatAction::Reset => *self = AchatState::default(),
        }
    }
}

/// Root store
#[derive(Debug, Default)]
pub struct Store {
    achat: AchatState,
    dispatched: usize,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: AchatAction) {
        tracing::debug!(?action, "dispatch");
        self.achat.reduce(action);
        self.dispatched += 1;
    }

    pub fn achat(&self) -> &AchatState {
        &self.achat
    }

    /// Number of actions dispatched so far
    pub fn dispatch_count(&self) -> usize {
        self.dispatched
    }
}
