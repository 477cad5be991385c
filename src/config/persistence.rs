//! File persistence configuration.

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    /// Where the session token lives between runs.
    pub session_path: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    session_path: ".zentrader_session",
};
