use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::core::{ApiError, LsClient};

/// Boxed future returned by [`StaticDataService::fetch_static_data`].
pub type StaticDataFuture<'a> = Pin<Box<dyn Future<Output = Result<String, ApiError>> + Send + 'a>>;

/// The network collaborator behind [`StaticDataFetcher`](crate::StaticDataFetcher).
///
/// This decouples the fetch/parse pipeline from the transport, so tests and callers can supply
/// their own source of payloads. It is implemented by [`LsClient`].
///
/// Contract: the returned future resolves exactly once, either to the raw response body or to
/// the error that prevented obtaining it. A future that never resolves leaves the fetcher's
/// channel empty forever.
pub trait StaticDataService: Send + Sync {
    /// Retrieves the raw static data payload for a sale slug or id.
    fn fetch_static_data<'a>(&'a self, sale_id: &'a str) -> StaticDataFuture<'a>;
}

impl StaticDataService for LsClient {
    fn fetch_static_data<'a>(&'a self, sale_id: &'a str) -> StaticDataFuture<'a> {
        Box::pin(crate::sale::api::fetch_static_body(self, sale_id))
    }
}

impl<T: StaticDataService + ?Sized> StaticDataService for Arc<T> {
    fn fetch_static_data<'a>(&'a self, sale_id: &'a str) -> StaticDataFuture<'a> {
        (**self).fetch_static_data(sale_id)
    }
}
