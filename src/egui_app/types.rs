/**
 * Shared Types Module
 *
 * Screens of the app. `route_name` gives the names the rest of the
 * marketplace app uses for the same screens.
 */

use crate::shared::{RouteParams, TradeRole};

/// A screen on the navigation stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Entry point: choose to buy or to sell
    Landing,
    /// Counterparty search-and-select. Entered with params for a sale.
    ChoixVendeur { params: Option<RouteParams> },
    /// Login screen shown when the session is rejected
    Login,
    /// Follow-up screen once a counterparty has been chosen
    VendeurSelected { role: TradeRole },
}

impl Screen {
    /// Picker entered in buy mode
    pub fn picker_for_purchase() -> Self {
        Screen::ChoixVendeur { params: None }
    }

    /// Picker entered in sell mode
    pub fn picker_for_sale() -> Self {
        let mut params = RouteParams::new();
        params.insert("type".to_string(), TradeRole::Vente.to_string());
        Screen::ChoixVendeur {
            params: Some(params),
        }
    }

    pub fn route_name(&self) -> &'static str {
        match self {
            Screen::Landing => "Landing",
            Screen::ChoixVendeur { .. } => "ChoixVendeur",
            Screen::Login => "Login1",
            Screen::VendeurSelected { .. } => "VendeurSelected",
        }
    }

    pub fn is_picker(&self) -> bool {
        matches!(self, Screen::ChoixVendeur { .. })
    }
}
