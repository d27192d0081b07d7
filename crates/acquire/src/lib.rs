//! # Verdant Acquire
//!
//! Band acquisition for the Verdant analysis engine.
//!
//! The engine consumes a red/near-infrared [`BandPair`]; this crate
//! defines where pairs come from. A [`SceneRequest`] names the area of
//! interest, date and resolution, and a [`BandSource`] serves it:
//!
//! - [`RemoteFetch`]: adapter over a caller-supplied transport
//! - [`SyntheticGenerator`]: reproducible demo scenes
//! - [`WithFallback`]: primary source with a logged fallback
//!
//! The analysis engine is agnostic to which source served a request.

pub mod bands;
pub mod error;
pub mod fallback;
pub mod remote;
pub mod request;
pub mod synthetic;

pub use bands::{BandPair, BandSource};
pub use error::{AcquireError, Result};
pub use fallback::WithFallback;
pub use remote::RemoteFetch;
pub use request::SceneRequest;
pub use synthetic::SyntheticGenerator;
