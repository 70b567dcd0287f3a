//! HTTP request/response primitives shared by the router, server, and views.

mod request;
mod response;

pub use request::{Request, RequestBuilder};
pub use response::Response;

use crate::error::Result;
use async_trait::async_trait;

/// A request handler.
///
/// Implemented by the views and by the router itself; the server drives the
/// top-level handler for every incoming request.
#[async_trait]
pub trait Handler: Send + Sync {
	async fn handle(&self, request: Request) -> Result<Response>;
}
