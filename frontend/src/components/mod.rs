pub mod category_chart;
pub mod header;
pub mod navigation_bar;
pub mod transaction_list;
pub mod transaction_modal;

pub use category_chart::CategoryChart;
pub use header::Header;
pub use navigation_bar::NavigationBar;
pub use transaction_list::TransactionList;
pub use transaction_modal::TransactionModal;
