//! Centralized constants for default endpoints and UA.

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("livesale-rs/", env!("CARGO_PKG_VERSION"));

/// Metaphysics GraphQL endpoint serving live sale static data.
pub(crate) const DEFAULT_BASE_GRAPHQL: &str = "https://metaphysics-production.artsy.net/";

/// Header carrying the user's access token.
pub(crate) const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Header carrying the user's id.
pub(crate) const USER_ID_HEADER: &str = "x-user-id";
