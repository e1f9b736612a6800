use serde::{Deserialize, Serialize};

use crate::domain::Product;

fn default_page_number() -> u32 {
    1
}

/// One page of the product collection as returned by `GET /products`.
///
/// The backend may omit fields on degenerate responses; missing values fall
/// back to an empty list on page 1 of 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub data: Vec<Product>,
    #[serde(default = "default_page_number")]
    pub total_pages: u32,
    #[serde(default = "default_page_number")]
    pub current_page: u32,
}

impl ProductPage {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            total_pages: 1,
            current_page: 1,
        }
    }
}
