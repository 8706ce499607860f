use crate::error::{Result, ServiceError};
use crate::models::product::{Product, ProductFields};
use crate::request::{Request, RequestHandler};
use crate::services::store::SessionFactory;

#[derive(Debug, Clone)]
pub struct ReplaceProductCommand {
    pub product_id: i64,
    pub fields: ProductFields,
}

impl Request<Result<Product>> for ReplaceProductCommand {}

pub struct ReplaceProductRequestHandler(pub SessionFactory);

#[async_trait::async_trait]
impl RequestHandler<ReplaceProductCommand, Result<Product>> for ReplaceProductRequestHandler {
    async fn handle(&self, command: ReplaceProductCommand) -> Result<Product> {
        let mut session = self.0.open_write_session().await?;
        let mut product = session
            .find(command.product_id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        product.replace(command.fields);
        session.update(&product).await?;
        session.commit().await?;

        log::info!("Updated: {} - {}", product.product_name, product.product_id);
        Ok(product)
    }
}
