pub mod memory;

pub use memory::{generate_id, ReceiptStore};
