//! Summaries listed on the catalog grid
use serde::{Deserialize, Serialize};

use crate::model::{Image, Money};

/// One product tile: enough to render a card and open the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub handle: String,
    pub title: String,
    /// Lowest variant price.
    pub price: Money,
    #[serde(default)]
    pub image: Option<Image>,
}
