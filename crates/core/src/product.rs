//! Product domain types.

use serde::{Deserialize, Serialize};

/// A single catalog product.
///
/// Immutable once fetched. Field values are trusted from the external API;
/// there is no per-field validation beyond type. `id` is unique within a
/// fetched list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Unit price, non-negative by API contract.
    pub price: f64,
    /// Image URL (the wire record calls this `thumbnail`).
    pub image: String,
    pub brand: String,
    pub category: String,
    pub stock: u32,
    /// Expected range 0–5.
    pub rating: f64,
}

/// Display hint for the catalog view. Has no effect on data selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}
