//! Trade direction
//!
//! Which side of the transaction the current user is on. The picker is
//! entered without route parameters to make a purchase offer (`achat`) and
//! with parameters to make a sale offer (`vente`).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Parameters attached to the picker route. Only their presence matters.
pub type RouteParams = BTreeMap<String, String>;

/// Role flag passed to the `VendeurSelected` screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeRole {
    /// Purchase offer: the counterparty is the seller
    Achat,
    /// Sale offer: the counterparty is the buyer
    Vente,
}

impl TradeRole {
    /// `achat` when the screen was entered without parameters, `vente` otherwise
    pub fn from_route_params(params: Option<&RouteParams>) -> Self {
        match params {
            Some(_) => TradeRole::Vente,
            None => TradeRole::Achat,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeRole::Achat => "achat",
            TradeRole::Vente => "vente",
        }
    }

    /// Banner title on the picker
    pub fn banner_title(&self) -> &'static str {
        match self {
            TradeRole::Achat => "Faire une proposition d'achat",
            TradeRole::Vente => "Faire une proposition de vente",
        }
    }

    /// Banner hint on the picker
    pub fn banner_hint(&self) -> &'static str {
        match self {
            TradeRole::Achat => "Trouvez le vendeur via N° téléphone, Email ou identifiant",
            TradeRole::Vente => "Trouvez l'acheteur via N° téléphone, Email ou identifiant",
        }
    }
}

impl fmt::Display for TradeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
