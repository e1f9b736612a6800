use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ProductId);

/// A catalog entry. `id` is `None` while the product is a local draft and
/// assigned by the backend once persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
    pub amount: i64,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// The empty template a new draft starts from.
    pub fn draft() -> Self {
        Self {
            id: None,
            name: String::new(),
            price: 0.0,
            amount: 0,
            description: String::new(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::draft()
    }
}

/// Rounds a price to the two decimal places the backend expects.
pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
