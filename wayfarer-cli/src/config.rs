//! CLI configuration

/// Configuration shared by all commands
pub struct Config {
    /// Base URL of the Wayfarer server
    pub server_url: String,
}
