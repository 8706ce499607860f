use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product row as stored in the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub product_price: f64,
    pub description: String,
    pub stock: i64,
}

/// The mutable columns of a product, all required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub product_name: String,
    pub product_price: f64,
    pub description: String,
    pub stock: i64,
}

/// The mutable columns of a product, each one optional.
///
/// A field that is missing or `null` leaves the stored column as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub product_name: Option<String>,
    pub product_price: Option<f64>,
    pub description: Option<String>,
    pub stock: Option<i64>,
}

impl Product {
    /// Overwrites every mutable column.
    pub fn replace(&mut self, fields: ProductFields) {
        self.product_name = fields.product_name;
        self.product_price = fields.product_price;
        self.description = fields.description;
        self.stock = fields.stock;
    }

    /// Overwrites only the columns present in the patch.
    pub fn patch(&mut self, patch: ProductPatch) {
        if let Some(product_name) = patch.product_name {
            self.product_name = product_name;
        }

        if let Some(product_price) = patch.product_price {
            self.product_price = product_price;
        }

        if let Some(description) = patch.description {
            self.description = description;
        }

        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Product, ProductFields, ProductPatch};

    fn widget() -> Product {
        Product {
            product_id: 1,
            product_name: "Widget".to_owned(),
            product_price: 9.99,
            description: "tools".to_owned(),
            stock: 5,
        }
    }

    #[test]
    fn replace_test() {
        let mut product = widget();
        product.replace(ProductFields {
            product_name: "Gadget".to_owned(),
            product_price: 1.5,
            description: "toys".to_owned(),
            stock: -2,
        });

        assert_eq!(1, product.product_id);
        assert_eq!("Gadget", product.product_name);
        assert_eq!(1.5, product.product_price);
        assert_eq!("toys", product.description);
        assert_eq!(-2, product.stock);
    }

    #[test]
    fn empty_patch_test() {
        let mut product = widget();
        product.patch(ProductPatch::default());
        assert_eq!(widget(), product);
    }

    #[test]
    fn partial_patch_test() {
        let mut product = widget();
        product.patch(ProductPatch {
            product_price: Some(4.99),
            stock: Some(0),
            ..ProductPatch::default()
        });

        assert_eq!("Widget", product.product_name);
        assert_eq!(4.99, product.product_price);
        assert_eq!("tools", product.description);
        assert_eq!(0, product.stock);
    }

    #[test]
    fn patch_from_json_test() {
        let patch: ProductPatch =
            serde_json::from_str(r#"{"description": "garden", "stock": null}"#).unwrap();

        assert_eq!(None, patch.product_name);
        assert_eq!(None, patch.product_price);
        assert_eq!(Some("garden".to_owned()), patch.description);
        assert_eq!(None, patch.stock);
    }

    #[test]
    fn fields_require_every_column_test() {
        let result = serde_json::from_str::<ProductFields>(
            r#"{"product_name": "Widget", "product_price": 9.99, "stock": 5}"#,
        );
        assert!(result.is_err());
    }
}
