use crate::error::Result;
use crate::models::product::Product;
use crate::request::{Request, RequestHandler};
use crate::services::store::SessionFactory;
use serde::Deserialize;

/// One page of products, `skip` rows in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GetAllProductsRequest {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

impl Default for GetAllProductsRequest {
    fn default() -> Self {
        GetAllProductsRequest {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl Request<Result<Vec<Product>>> for GetAllProductsRequest {}

pub struct GetAllProductsRequestHandler(pub SessionFactory);

#[async_trait::async_trait]
impl RequestHandler<GetAllProductsRequest, Result<Vec<Product>>> for GetAllProductsRequestHandler {
    async fn handle(&self, req: GetAllProductsRequest) -> Result<Vec<Product>> {
        let mut session = self.0.open_session().await?;
        let products = session.list(req.skip, req.limit).await?;
        Ok(products)
    }
}
