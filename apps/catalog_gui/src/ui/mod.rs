//! UI layer: app shell and stateless render helpers for the catalog views.

pub mod app;

pub use app::CatalogApp;
