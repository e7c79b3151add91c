pub mod add_transaction;
pub mod home;
pub mod insight;
pub mod profile;
pub mod transactions;

pub use add_transaction::AddTransactionPage;
pub use home::HomePage;
pub use insight::InsightPage;
pub use profile::ProfilePage;
pub use transactions::TransactionsPage;
