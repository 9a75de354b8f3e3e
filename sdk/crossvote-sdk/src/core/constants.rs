pub use crossvote_program::config::{
    DEFAULT_DOMAIN_NAME, DEFAULT_DOMAIN_VERSION, DEFAULT_MAX_SESSION_DURATION,
};

/// Default session lifetime requested by the builders: one day.
pub const DEFAULT_SESSION_DURATION: u64 = 24 * 60 * 60;
