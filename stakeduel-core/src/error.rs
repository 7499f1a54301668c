use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Stale oracle data for {asset}: quote is {age_secs}s old, freshness threshold is {max_age_secs}s")]
    StaleOracleData {
        asset: String,
        age_secs: i64,
        max_age_secs: i64,
    },

    #[error("Insufficient balance: need {need}, have {available}")]
    InsufficientBalance { need: u64, available: u64 },

    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),

    #[error("Oracle feed error: {0}")]
    Oracle(String),

    #[error("Token transfer failed: {0}")]
    Token(String),
}

impl CoreError {
    pub fn oracle(msg: impl Into<String>) -> Self {
        Self::Oracle(msg.into())
    }

    pub fn token(msg: impl Into<String>) -> Self {
        Self::Token(msg.into())
    }
}
