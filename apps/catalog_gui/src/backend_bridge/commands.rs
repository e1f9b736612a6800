//! Backend commands queued from UI to backend worker.

use shared::domain::{Product, ProductId};

#[derive(Debug)]
pub enum BackendCommand {
    LoadPage {
        page: u32,
        seq: u64,
    },
    CreateProduct {
        draft: Product,
    },
    UpdateProduct {
        id: ProductId,
        product: Product,
    },
    DeleteProduct {
        id: ProductId,
    },
}
