mod get_all_products;
pub use get_all_products::*;

mod filter_products;
pub use filter_products::*;
