pub(crate) mod api;
mod extract;
mod model;

pub use extract::{
    extract_bidder_id, extract_jwt, extract_sale, extract_static_data, parse_static_data,
};
pub use model::{Artwork, LiveSale, SaleArtwork};

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::channel::ResultChannel;
use crate::core::{FetchError, LsClient, StaticDataService};

/// A causality JWT authorizing a bidder in one live sale.
pub type Jwt = String;

/// Everything needed to join a live sale, fetched in one round trip.
///
/// Only ever built with all three fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleStaticResult<S = LiveSale> {
    /// The sale decoded from `data.sale`.
    pub sale: S,
    /// The causality JWT from `data.causality_jwt`.
    pub jwt: Jwt,
    /// The bidder's paddle number from `data.me.paddle_number`.
    pub bidder_id: String,
}

/// The single terminal value published by a fetch.
pub type FetchOutcome<S = LiveSale> = Result<SaleStaticResult<S>, FetchError>;

/// Anything that can start a static data fetch.
///
/// Lets callers swap a [`StaticDataFetcher`] for a stand-in.
pub trait FetchStaticData<S = LiveSale> {
    /// Starts one fetch and returns its (initially empty) result channel.
    fn fetch_static_data(&self) -> ResultChannel<FetchOutcome<S>>;
}

/// Fetches the static data of one live sale: the sale itself, the causality JWT and the
/// bidder's paddle number.
///
/// Every call to [`fetch_static_data`](Self::fetch_static_data) issues exactly one request
/// and publishes exactly one outcome. There is no retry, caching or cancellation.
///
/// # Example
///
/// ```no_run
/// # use livesale_rs::{LsClient, StaticDataFetcher};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = LsClient::builder().access_token("token").build()?;
/// let fetcher: StaticDataFetcher = StaticDataFetcher::from_client(&client, "los-angeles-modern-auctions");
///
/// let channel = fetcher.fetch_static_data();
/// channel.subscribe(|outcome| match outcome {
///     Ok(data) => println!("joined {} as paddle {}", data.sale.id, data.bidder_id),
///     Err(e) => eprintln!("fetch failed: {e}"),
/// });
///
/// // Late subscribers and awaiting callers see the same single value.
/// if let Ok(data) = &*channel.recv().await {
///     println!("causality jwt: {}", data.jwt);
/// }
/// # Ok(())
/// # }
/// ```
pub struct StaticDataFetcher<S = LiveSale> {
    sale_id: String,
    service: Arc<dyn StaticDataService>,
    _sale: std::marker::PhantomData<fn() -> S>,
}

impl<S> Clone for StaticDataFetcher<S> {
    fn clone(&self) -> Self {
        Self {
            sale_id: self.sale_id.clone(),
            service: Arc::clone(&self.service),
            _sale: std::marker::PhantomData,
        }
    }
}

impl<S> StaticDataFetcher<S>
where
    S: DeserializeOwned + Send + Sync + 'static,
{
    /// Creates a fetcher for a sale slug or id backed by an arbitrary service.
    ///
    /// The id is passed through verbatim; no format validation happens here.
    pub fn new(service: Arc<dyn StaticDataService>, sale_id: impl Into<String>) -> Self {
        Self {
            sale_id: sale_id.into(),
            service,
            _sale: std::marker::PhantomData,
        }
    }

    /// Creates a fetcher that goes over HTTP through `client` (cloned internally).
    pub fn from_client(client: &LsClient, sale_id: impl Into<String>) -> Self {
        Self::new(Arc::new(client.clone()), sale_id)
    }

    /// The sale slug or id this fetcher targets.
    pub fn sale_id(&self) -> &str {
        &self.sale_id
    }

    /// Starts the fetch and returns its result channel right away.
    ///
    /// The request runs on a spawned tokio task, so this must be called from within a tokio
    /// runtime. The channel stays empty until the service answers; if it never does, the
    /// channel is never filled.
    #[must_use = "the outcome is only observable through the returned channel"]
    pub fn fetch_static_data(&self) -> ResultChannel<FetchOutcome<S>> {
        let channel = ResultChannel::new();
        let publisher = channel.clone();
        let service = Arc::clone(&self.service);
        let sale_id = self.sale_id.clone();

        tokio::spawn(async move {
            let outcome = match service.fetch_static_data(&sale_id).await {
                Ok(body) => parse_static_data::<S>(&body),
                Err(cause) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(sale_id = %sale_id, error = %cause, "static data request failed");
                    Err(FetchError::Transport(cause))
                }
            };
            publisher.publish(outcome);
        });

        channel
    }
}

impl<S> FetchStaticData<S> for StaticDataFetcher<S>
where
    S: DeserializeOwned + Send + Sync + 'static,
{
    fn fetch_static_data(&self) -> ResultChannel<FetchOutcome<S>> {
        StaticDataFetcher::fetch_static_data(self)
    }
}
