//! Session configuration.

/// Connection settings for a [`Session`](crate::Session).
///
/// Immutable once the session is constructed. Hosts typically build one
/// from their own baked-in constants:
///
/// ```rust
/// use slirc_client::Config;
///
/// let config = Config {
///     nick: "mybot".to_string(),
///     user: "mybot".to_string(),
///     real_name: "My Bot".to_string(),
///     server: "irc.libera.chat".to_string(),
///     tls: true,
///     port: 6697,
///     channels: vec!["#rust".to_string()],
/// };
/// assert!(config.tls);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Username sent in `USER`.
    pub user: String,
    /// Nickname sent in `NICK`.
    pub nick: String,
    /// Real name sent as the `USER` trailing parameter.
    pub real_name: String,
    /// Server host name or address.
    pub server: String,
    /// Server port.
    pub port: u16,
    /// Wrap the connection in TLS.
    pub tls: bool,
    /// Channels joined automatically at end of MOTD, in order.
    pub channels: Vec<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            user: String::new(),
            nick: String::new(),
            real_name: String::new(),
            server: String::new(),
            port: 6667,
            tls: false,
            channels: Vec::new(),
        }
    }
}
