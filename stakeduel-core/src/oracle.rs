use crate::error::{CoreError, Result};
use crate::types::PricePoint;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

/// Read contract of the external price feed. Implementations are expected
/// to return the feed's latest quote together with its publication time;
/// freshness is judged by the adapter, not the feed.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    async fn read_price(&self, asset: &str) -> Result<PricePoint>;
}

/// Wraps a price feed with the freshness threshold configured for one game.
///
/// Every price consumed by trading or settlement must come through
/// [`OracleAdapter::fresh_price`]; a quote older than the threshold is a
/// hard failure, never a retry.
#[derive(Clone)]
pub struct OracleAdapter {
    feed: Arc<dyn PriceFeed>,
    max_age: Duration,
}

impl OracleAdapter {
    pub fn new(feed: Arc<dyn PriceFeed>, max_age: Duration) -> Self {
        Self { feed, max_age }
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// A quote is usable while its age does not exceed the threshold.
    pub fn is_fresh(timestamp: DateTime<Utc>, now: DateTime<Utc>, max_age: Duration) -> bool {
        now.signed_duration_since(timestamp) <= max_age
    }

    /// Read a price, rejecting it if it is older than the threshold.
    pub async fn fresh_price(&self, asset: &str, now: DateTime<Utc>) -> Result<PricePoint> {
        let point = self.feed.read_price(asset).await?;
        if !Self::is_fresh(point.timestamp, now, self.max_age) {
            return Err(CoreError::StaleOracleData {
                asset: asset.to_string(),
                age_secs: now.signed_duration_since(point.timestamp).num_seconds(),
                max_age_secs: self.max_age.num_seconds(),
            });
        }
        Ok(point)
    }
}

impl std::fmt::Debug for OracleAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleAdapter")
            .field("max_age", &self.max_age)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::HashMap;

    fn t(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[derive(Default)]
    struct TableFeed {
        prices: Mutex<HashMap<String, PricePoint>>,
    }

    impl TableFeed {
        fn set(&self, asset: &str, price: u64, timestamp: DateTime<Utc>) {
            self.prices
                .lock()
                .insert(asset.to_string(), PricePoint { price, timestamp });
        }
    }

    #[async_trait]
    impl PriceFeed for TableFeed {
        async fn read_price(&self, asset: &str) -> Result<PricePoint> {
            self.prices
                .lock()
                .get(asset)
                .copied()
                .ok_or_else(|| CoreError::oracle(format!("no quote for {}", asset)))
        }
    }

    #[test]
    fn freshness_boundary_is_inclusive() {
        let max_age = Duration::seconds(60);
        assert!(OracleAdapter::is_fresh(t(0), t(60), max_age));
        assert!(!OracleAdapter::is_fresh(t(0), t(61), max_age));
        // a quote stamped in the future is not stale
        assert!(OracleAdapter::is_fresh(t(100), t(50), max_age));
    }

    #[tokio::test]
    async fn fresh_price_rejects_old_quotes() {
        let feed = Arc::new(TableFeed::default());
        feed.set("A", 5, t(0));
        let oracle = OracleAdapter::new(feed, Duration::seconds(60));

        let point = oracle.fresh_price("A", t(30)).await.unwrap();
        assert_eq!(point.price, 5);

        let err = oracle.fresh_price("A", t(100)).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::StaleOracleData {
                age_secs: 100,
                max_age_secs: 60,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn missing_quote_surfaces_feed_error() {
        let feed = Arc::new(TableFeed::default());
        let oracle = OracleAdapter::new(feed, Duration::seconds(60));

        let err = oracle.fresh_price("A", t(0)).await.unwrap_err();
        assert!(matches!(err, CoreError::Oracle(_)));
    }
}
