//! livesale-rs: one-shot retrieval of live auction sale static data.
//!
//! A [`StaticDataFetcher`] issues a single request for a sale and publishes the decoded
//! sale, the bidder's causality JWT and paddle number, or a [`FetchError`], onto a
//! [`ResultChannel`] that replays the value to every subscriber.

pub mod channel;
pub mod core;
pub mod sale;

pub use channel::ResultChannel;
pub use crate::core::{
    ApiError, FetchError, LsClient, LsClientBuilder, StaticDataFuture, StaticDataService,
};
pub use sale::{
    Artwork, FetchOutcome, FetchStaticData, Jwt, LiveSale, SaleArtwork, SaleStaticResult,
    StaticDataFetcher, parse_static_data,
};
