/// Represents a request to the product catalog.
pub trait Request<Res> {}

/// Handles a request to the product catalog.
#[async_trait::async_trait]
pub trait RequestHandler<Req, Res>
where
    Req: Request<Res> + Send,
{
    /// Handle a request and returns the response.
    async fn handle(&self, req: Req) -> Res;
}
