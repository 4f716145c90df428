/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Fatal configuration problems, detected once at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid floor count {0}: the building needs at least one floor")]
    InvalidFloorCount(u8),
    #[error("invalid request budget {0}: at least one request must be generated")]
    InvalidRequestBudget(u32),
    #[error("invalid arrival interval {0}: must be at least 1")]
    InvalidInterval(u32),
    #[error("invalid queue capacity {0}: must be at least 1")]
    InvalidQueueCapacity(usize),
}

/// The request queue is full. Recoverable: the caller drops the arrival.
#[derive(Debug, Error, PartialEq)]
#[error("request queue is full (capacity {capacity})")]
pub struct CapacityExceeded {
    pub capacity: usize,
}
