use crate::error::{Result, ServiceError};
use crate::models::product::Product;
use crate::request::{Request, RequestHandler};
use crate::services::store::SessionFactory;

#[derive(Debug, Clone, Copy)]
pub struct DeleteProductCommand(pub i64);
impl Request<Result<Product>> for DeleteProductCommand {}

pub struct DeleteProductRequestHandler(pub SessionFactory);

#[async_trait::async_trait]
impl RequestHandler<DeleteProductCommand, Result<Product>> for DeleteProductRequestHandler {
    async fn handle(&self, command: DeleteProductCommand) -> Result<Product> {
        let mut session = self.0.open_write_session().await?;
        let deleted = session
            .find(command.0)
            .await?
            .ok_or(ServiceError::NotFound)?;

        session.delete(deleted.product_id).await?;
        session.commit().await?;

        log::info!("Deleted: {} - {}", deleted.product_name, deleted.product_id);
        Ok(deleted)
    }
}
