use crate::error::{Result, ServiceError};
use crate::models::product::{Product, ProductPatch};
use crate::request::{Request, RequestHandler};
use crate::services::store::SessionFactory;

#[derive(Debug, Clone)]
pub struct PatchProductCommand {
    pub product_id: i64,
    pub patch: ProductPatch,
}

impl Request<Result<Product>> for PatchProductCommand {}

pub struct PatchProductRequestHandler(pub SessionFactory);

#[async_trait::async_trait]
impl RequestHandler<PatchProductCommand, Result<Product>> for PatchProductRequestHandler {
    async fn handle(&self, command: PatchProductCommand) -> Result<Product> {
        let mut session = self.0.open_write_session().await?;
        let mut product = session
            .find(command.product_id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        product.patch(command.patch);
        session.update(&product).await?;
        session.commit().await?;

        log::info!("Updated: {} - {}", product.product_name, product.product_id);
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::{PatchProductCommand, PatchProductRequestHandler};
    use crate::error::ServiceError;
    use crate::models::product::{Product, ProductFields, ProductPatch};
    use crate::request::RequestHandler;
    use crate::config::Settings;
    use crate::services::store::SessionFactory;
    use tempfile::TempDir;

    async fn seed(sessions: &SessionFactory) -> Product {
        let mut session = sessions.open_session().await.unwrap();
        let product = session
            .insert(&ProductFields {
                product_name: "Widget".to_owned(),
                product_price: 9.99,
                description: "tools".to_owned(),
                stock: 5,
            })
            .await
            .unwrap();
        session.commit().await.unwrap();
        product
    }

    #[actix_web::test]
    async fn empty_patch_keeps_row_test() {
        let sessions = SessionFactory::in_memory().await.unwrap();
        let created = seed(&sessions).await;

        let patched = PatchProductRequestHandler(sessions)
            .handle(PatchProductCommand {
                product_id: created.product_id,
                patch: ProductPatch::default(),
            })
            .await
            .unwrap();

        assert_eq!(created, patched);
    }

    #[actix_web::test]
    async fn patch_subsets_test() {
        let patches = vec![
            ProductPatch {
                product_name: Some("Gadget".to_owned()),
                ..ProductPatch::default()
            },
            ProductPatch {
                product_price: Some(1.25),
                ..ProductPatch::default()
            },
            ProductPatch {
                description: Some("garden".to_owned()),
                stock: Some(-3),
                ..ProductPatch::default()
            },
            ProductPatch {
                product_name: Some("Gadget".to_owned()),
                product_price: Some(1.25),
                description: Some("garden".to_owned()),
                stock: Some(-3),
            },
        ];

        for patch in patches {
            let sessions = SessionFactory::in_memory().await.unwrap();
            let created = seed(&sessions).await;

            let mut expected = created.clone();
            expected.patch(patch.clone());

            let patched = PatchProductRequestHandler(sessions.clone())
                .handle(PatchProductCommand {
                    product_id: created.product_id,
                    patch: patch.clone(),
                })
                .await
                .unwrap();

            assert_eq!(expected, patched);
            assert_eq!(
                patch.product_name.unwrap_or(created.product_name),
                patched.product_name
            );
            assert_eq!(patch.stock.unwrap_or(created.stock), patched.stock);

            let mut session = sessions.open_session().await.unwrap();
            assert_eq!(Some(patched), session.find(created.product_id).await.unwrap());
        }
    }

    #[actix_web::test]
    async fn patch_missing_product_test() {
        let sessions = SessionFactory::in_memory().await.unwrap();
        let result = PatchProductRequestHandler(sessions)
            .handle(PatchProductCommand {
                product_id: 7,
                patch: ProductPatch::default(),
            })
            .await;

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[actix_web::test]
    async fn concurrent_patches_test() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            database_url: format!("sqlite://{}", dir.path().join("inventory.db").display()),
            ..Settings::default()
        };
        let sessions = SessionFactory::connect(&settings).await.unwrap();
        let created = seed(&sessions).await;

        let first = PatchProductRequestHandler(sessions.clone());
        let second = PatchProductRequestHandler(sessions.clone());

        for round in 0..20 {
            let (a, b) = tokio::join!(
                first.handle(PatchProductCommand {
                    product_id: created.product_id,
                    patch: ProductPatch {
                        stock: Some(round),
                        ..ProductPatch::default()
                    },
                }),
                second.handle(PatchProductCommand {
                    product_id: created.product_id,
                    patch: ProductPatch {
                        description: Some(format!("round {}", round)),
                        ..ProductPatch::default()
                    },
                })
            );

            a.unwrap();
            b.unwrap();
        }

        // Each patch read the row after the other one committed, so neither update was lost.
        let mut session = sessions.open_session().await.unwrap();
        let product = session.find(created.product_id).await.unwrap().unwrap();
        assert_eq!(19, product.stock);
        assert_eq!("round 19", product.description);
        assert_eq!("Widget", product.product_name);
    }
}
