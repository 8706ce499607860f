use crate::error::{Result, ServiceError};
use crate::models::product::Product;
use crate::request::{Request, RequestHandler};
use crate::services::store::{PriceOrder, SessionFactory};
use serde::Deserialize;

/// Products matching a category, optionally sorted by price.
///
/// `category` is compared against the `description` column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterProductsRequest {
    pub category: Option<String>,
    pub sort_by: Option<String>,
}

impl FilterProductsRequest {
    /// An empty category filters nothing.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|category| !category.is_empty())
    }

    /// `price_asc` and `price_desc` sort by price; anything else keeps store order.
    pub fn order(&self) -> Option<PriceOrder> {
        match self.sort_by.as_deref() {
            Some("price_asc") => Some(PriceOrder::Ascending),
            Some("price_desc") => Some(PriceOrder::Descending),
            _ => None,
        }
    }
}

impl Request<Result<Vec<Product>>> for FilterProductsRequest {}

pub struct FilterProductsRequestHandler(pub SessionFactory);

#[async_trait::async_trait]
impl RequestHandler<FilterProductsRequest, Result<Vec<Product>>> for FilterProductsRequestHandler {
    async fn handle(&self, req: FilterProductsRequest) -> Result<Vec<Product>> {
        let mut session = self.0.open_session().await?;
        let products = session.filter(req.category(), req.order()).await?;

        if products.is_empty() {
            return Err(ServiceError::EmptyResult);
        }

        Ok(products)
    }
}
