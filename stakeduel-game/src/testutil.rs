//! Mock collaborators shared by the test suites.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use crate::game::Duel;
use crate::rules::GameRules;
use stakeduel_core::{
    CoreError, EventSink, GameEvent, OracleAdapter, PriceFeed, PricePoint, TokenLedger,
};

pub fn t(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Token collaborator that records transfers instead of moving funds.
#[derive(Default)]
pub struct MockTokenLedger {
    pub deposits: Mutex<Vec<(Uuid, u64)>>,
    pub payouts: Mutex<Vec<(Uuid, u64)>>,
    reject_deposits: AtomicBool,
}

impl MockTokenLedger {
    pub fn fail_deposits(&self) {
        self.reject_deposits.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl TokenLedger for MockTokenLedger {
    async fn deposit(&self, from: Uuid, amount: u64) -> stakeduel_core::Result<()> {
        if self.reject_deposits.load(Ordering::SeqCst) {
            return Err(CoreError::token("deposit rejected"));
        }
        self.deposits.lock().push((from, amount));
        Ok(())
    }

    async fn payout(&self, to: Uuid, amount: u64) -> stakeduel_core::Result<()> {
        self.payouts.lock().push((to, amount));
        Ok(())
    }
}

/// Price feed backed by a settable table of quotes.
#[derive(Default)]
pub struct MockPriceFeed {
    prices: Mutex<HashMap<String, PricePoint>>,
}

impl MockPriceFeed {
    pub fn set_price(&self, asset: &str, price: u64, timestamp: DateTime<Utc>) {
        self.prices
            .lock()
            .insert(asset.to_string(), PricePoint { price, timestamp });
    }
}

#[async_trait]
impl PriceFeed for MockPriceFeed {
    async fn read_price(&self, asset: &str) -> stakeduel_core::Result<PricePoint> {
        self.prices
            .lock()
            .get(asset)
            .copied()
            .ok_or_else(|| CoreError::oracle(format!("no quote for {}", asset)))
    }
}

/// Sink that records every emitted notification.
#[derive(Default)]
pub struct RecordingEvents {
    events: Mutex<Vec<GameEvent>>,
}

impl RecordingEvents {
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().clone()
    }
}

impl EventSink for RecordingEvents {
    fn emit(&self, event: GameEvent) {
        self.events.lock().push(event);
    }
}

/// One set of mock collaborators plus shortcuts for building games on
/// top of them.
pub struct Fixture {
    pub token: Arc<MockTokenLedger>,
    pub feed: Arc<MockPriceFeed>,
    pub events: Arc<RecordingEvents>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            token: Arc::new(MockTokenLedger::default()),
            feed: Arc::new(MockPriceFeed::default()),
            events: Arc::new(RecordingEvents::default()),
        }
    }

    /// Oracle adapter over the fixture's feed with the given freshness
    /// threshold in seconds.
    pub fn oracle(&self, max_age_secs: i64) -> OracleAdapter {
        OracleAdapter::new(self.feed.clone(), Duration::seconds(max_age_secs))
    }

    /// A duel over the fixture's collaborators with a 60s oracle
    /// threshold.
    pub fn duel(&self, rules: GameRules) -> Duel {
        Duel::new(
            rules,
            self.oracle(60),
            self.token.clone(),
            self.events.clone(),
        )
        .unwrap()
    }

    /// A duel with two freshly enrolled players, activated at t(0).
    pub async fn active_duel(&self, rules: GameRules) -> (Duel, Uuid, Uuid) {
        let mut duel = self.duel(rules);
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        duel.enroll(p1, t(0)).await.unwrap();
        duel.enroll(p2, t(0)).await.unwrap();
        (duel, p1, p2)
    }
}
