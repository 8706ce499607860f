use crate::error::Result;
use crate::models::product::{Product, ProductFields};
use crate::request::{Request, RequestHandler};
use crate::services::store::SessionFactory;

#[derive(Debug, Clone)]
pub struct AddProductCommand(pub ProductFields);
impl Request<Result<Product>> for AddProductCommand {}

pub struct AddProductRequestHandler(pub SessionFactory);

#[async_trait::async_trait]
impl RequestHandler<AddProductCommand, Result<Product>> for AddProductRequestHandler {
    async fn handle(&self, command: AddProductCommand) -> Result<Product> {
        let mut session = self.0.open_session().await?;
        let product = session.insert(&command.0).await?;
        session.commit().await?;

        log::info!("Added: {} - {}", product.product_name, product.product_id);
        Ok(product)
    }
}
