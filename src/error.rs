use thiserror::Error;

/// Malformed-snapshot conditions. These are caught at the transport
/// boundary; the strategy only ever sees well-formed worlds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("snake body has no segments")]
    EmptyBody,

    #[error("board dimensions must be positive, got {width}x{height}")]
    BadBoard { width: i64, height: i64 },
}
