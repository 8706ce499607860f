use crate::commands::{
    AddProductCommand, AddProductRequestHandler, DeleteProductCommand, DeleteProductRequestHandler,
    PatchProductCommand, PatchProductRequestHandler, ReplaceProductCommand,
    ReplaceProductRequestHandler,
};
use crate::error::Result;
use crate::models::product::{Product, ProductFields, ProductPatch};
use crate::queries::{
    FilterProductsRequest, FilterProductsRequestHandler, GetAllProductsRequest,
    GetAllProductsRequestHandler,
};
use crate::request::RequestHandler;
use crate::services::store::SessionFactory;
use actix_web::web::{self, Data, Json};
use actix_web::{delete, get, patch, post, put, HttpResponse};
use serde::Serialize;

const UPDATED_MESSAGE: &str = "Product updated successfully";
const DELETED_MESSAGE: &str = "Product deleted successfully";

#[derive(Debug, Serialize)]
struct Message {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct UpdatedProduct {
    message: &'static str,
    product: Product,
}

#[post("/products")]
pub async fn create(
    sessions: Data<SessionFactory>,
    body: Json<ProductFields>,
) -> Result<HttpResponse> {
    let handler = AddProductRequestHandler(sessions.get_ref().clone());
    let product = handler.handle(AddProductCommand(body.into_inner())).await?;

    Ok(HttpResponse::Ok().json(product))
}

#[get("/products")]
pub async fn get_all(
    sessions: Data<SessionFactory>,
    query: web::Query<GetAllProductsRequest>,
) -> Result<HttpResponse> {
    let handler = GetAllProductsRequestHandler(sessions.get_ref().clone());
    let products = handler.handle(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(products))
}

#[put("/products/{product_id}")]
pub async fn replace(
    path: web::Path<i64>,
    sessions: Data<SessionFactory>,
    body: Json<ProductFields>,
) -> Result<HttpResponse> {
    let handler = ReplaceProductRequestHandler(sessions.get_ref().clone());
    let product = handler
        .handle(ReplaceProductCommand {
            product_id: path.into_inner(),
            fields: body.into_inner(),
        })
        .await?;

    Ok(HttpResponse::Ok().json(UpdatedProduct {
        message: UPDATED_MESSAGE,
        product,
    }))
}

#[patch("/products/{product_id}")]
pub async fn patch(
    path: web::Path<i64>,
    sessions: Data<SessionFactory>,
    body: Json<ProductPatch>,
) -> Result<HttpResponse> {
    let handler = PatchProductRequestHandler(sessions.get_ref().clone());
    let product = handler
        .handle(PatchProductCommand {
            product_id: path.into_inner(),
            patch: body.into_inner(),
        })
        .await?;

    Ok(HttpResponse::Ok().json(UpdatedProduct {
        message: UPDATED_MESSAGE,
        product,
    }))
}

#[delete("/products/{product_id}")]
pub async fn delete(path: web::Path<i64>, sessions: Data<SessionFactory>) -> Result<HttpResponse> {
    let handler = DeleteProductRequestHandler(sessions.get_ref().clone());
    handler.handle(DeleteProductCommand(path.into_inner())).await?;

    Ok(HttpResponse::Ok().json(Message {
        message: DELETED_MESSAGE,
    }))
}

#[get("/filter")]
pub async fn filter(
    sessions: Data<SessionFactory>,
    query: web::Query<FilterProductsRequest>,
) -> Result<HttpResponse> {
    let handler = FilterProductsRequestHandler(sessions.get_ref().clone());
    let products = handler.handle(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(products))
}
