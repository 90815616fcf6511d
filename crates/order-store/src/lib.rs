pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use common::{Order, OrderId, OrderStatus};
pub use error::{OrderStoreError, Result};
pub use memory::InMemoryOrderStore;
pub use postgres::PostgresOrderStore;
pub use store::{OrderStore, OrderStoreExt};
