//! Fallback acquisition.
//!
//! Chains two sources: when the primary fails, the secondary serves
//! the request. The degradation is logged, never silent, so a
//! dashboard can tell a live scene from a substitute.

use tracing::warn;

use crate::bands::{BandPair, BandSource};
use crate::error::Result;
use crate::request::SceneRequest;

/// A primary source with a fallback.
pub struct WithFallback<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> WithFallback<P, S>
where
    P: BandSource,
    S: BandSource,
{
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P, S> BandSource for WithFallback<P, S>
where
    P: BandSource,
    S: BandSource,
{
    fn acquire(&self, request: &SceneRequest) -> Result<BandPair> {
        match self.primary.acquire(request) {
            Ok(pair) => Ok(pair),
            Err(e) => {
                warn!("primary band source failed ({e}); falling back");
                self.secondary.acquire(request)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AcquireError;
    use crate::synthetic::SyntheticGenerator;
    use verdant_core::aoi::BBox;

    struct FailingSource;

    impl BandSource for FailingSource {
        fn acquire(&self, _request: &SceneRequest) -> Result<BandPair> {
            Err(AcquireError::Fetch("connection refused".into()))
        }
    }

    fn request() -> SceneRequest {
        SceneRequest::new(BBox::new(10.0, 45.0, 10.02, 45.02), 10.0)
    }

    #[test]
    fn test_primary_wins_when_healthy() {
        let primary = SyntheticGenerator::seeded(1);
        let secondary = SyntheticGenerator::seeded(2);
        let chained = WithFallback::new(primary, secondary);

        let served = chained.acquire(&request()).unwrap();
        let expected = SyntheticGenerator::seeded(1).acquire(&request()).unwrap();

        assert_eq!(served.red(), expected.red());
        assert_eq!(served.nir(), expected.nir());
    }

    #[test]
    fn test_falls_back_on_failure() {
        let chained = WithFallback::new(FailingSource, SyntheticGenerator::seeded(2));

        let served = chained.acquire(&request()).unwrap();
        let expected = SyntheticGenerator::seeded(2).acquire(&request()).unwrap();

        assert_eq!(served.red(), expected.red());
    }

    #[test]
    fn test_both_failing_reports_secondary_error() {
        let chained = WithFallback::new(FailingSource, FailingSource);

        assert!(matches!(
            chained.acquire(&request()),
            Err(AcquireError::Fetch(_))
        ));
    }
}
