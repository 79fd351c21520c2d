//! Selection Dispatcher
//!
//! What happens when a row of the picker is tapped.

use crate::egui_app::navigation::Navigator;
use crate::egui_app::store::{AchatAction, Store};
use crate::egui_app::types::Screen;
use crate::shared::{RouteParams, TradeRole, User};

/// Store `user` as the chosen counterparty, then open `VendeurSelected`.
///
/// `params` are the parameters the picker route was entered with; their
/// presence selects the `vente` role, their absence `achat`.
pub fn selected(
    user: &User,
    params: Option<&RouteParams>,
    store: &mut Store,
    navigator: &mut Navigator,
) -> TradeRole {
    store.dispatch(AchatAction::SetUser(user.clone()));

    let role = TradeRole::from_route_params(params);
    navigator.navigate(Screen::VendeurSelected { role });
    role
}
