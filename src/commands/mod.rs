mod add_product;
pub use add_product::*;

mod replace_product;
pub use replace_product::*;

mod patch_product;
pub use patch_product::*;

mod delete_product;
pub use delete_product::*;
