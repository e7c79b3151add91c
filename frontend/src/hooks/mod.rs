pub mod use_add_transaction;
pub mod use_disclosure;
pub mod use_host_bridge;
pub mod use_router;
pub mod use_transactions;

pub use use_add_transaction::use_add_transaction;
pub use use_disclosure::use_disclosure;
pub use use_host_bridge::use_host_bridge;
pub use use_router::use_router;
pub use use_transactions::use_transactions;
