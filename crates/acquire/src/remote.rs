//! Remote acquisition adapter.
//!
//! Transport concerns (HTTP client, catalog protocol, authentication)
//! stay with the caller; this adapter runs the supplied fetch and
//! validates that what comes back fits the request.

use crate::bands::{BandPair, BandSource};
use crate::error::{AcquireError, Result};
use crate::request::SceneRequest;

/// Remote source backed by a caller-supplied fetch function.
pub struct RemoteFetch<F>
where
    F: Fn(&SceneRequest) -> Result<BandPair>,
{
    fetch: F,
}

impl<F> RemoteFetch<F>
where
    F: Fn(&SceneRequest) -> Result<BandPair>,
{
    pub fn new(fetch: F) -> Self {
        Self { fetch }
    }
}

impl<F> BandSource for RemoteFetch<F>
where
    F: Fn(&SceneRequest) -> Result<BandPair>,
{
    fn acquire(&self, request: &SceneRequest) -> Result<BandPair> {
        let pair = (self.fetch)(request)?;

        let (er, ec) = request.grid_shape()?;
        let (ar, ac) = pair.shape();
        if (ar, ac) != (er, ec) {
            return Err(AcquireError::WrongShape { er, ec, ar, ac });
        }

        Ok(pair)
    }
}
