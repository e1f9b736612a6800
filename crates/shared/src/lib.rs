//! Data contracts shared between the catalog API client and the GUI app.

pub mod domain;
pub mod error;
pub mod protocol;
