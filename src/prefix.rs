//! IRC message prefix (source) types.
//!
//! A prefix names the origin of a message: `nick[!user][@host]` for users,
//! or a bare server name. The borrowed [`PrefixRef`] is produced during
//! parsing; the owned [`Prefix`] is what typed messages carry across thread
//! boundaries.

use std::fmt;

/// A borrowed, decomposed message prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixRef<'a> {
    /// Nickname or server name (everything before `!` and `@`).
    pub nick: &'a str,
    /// Username, when a `!` delimiter was present.
    pub user: Option<&'a str>,
    /// Hostname, when a `@` delimiter was present.
    pub host: Option<&'a str>,
}

impl<'a> PrefixRef<'a> {
    /// Decompose a raw prefix token (the text after the leading `:` and
    /// before the first whitespace).
    ///
    /// Returns `None` for shapes that cannot be a prefix: an empty token,
    /// a token containing whitespace, or `!` appearing at or after `@`.
    pub fn parse(raw: &'a str) -> Option<PrefixRef<'a>> {
        if raw.is_empty() || raw.contains(char::is_whitespace) {
            return None;
        }

        let bang = raw.find('!');
        let at = raw.find('@');

        match (bang, at) {
            (Some(b), Some(a)) if b >= a => None,
            (Some(b), Some(a)) => Some(PrefixRef {
                nick: &raw[..b],
                user: Some(&raw[b + 1..a]),
                host: Some(&raw[a + 1..]),
            }),
            (Some(b), None) => Some(PrefixRef {
                nick: &raw[..b],
                user: Some(&raw[b + 1..]),
                host: None,
            }),
            (None, Some(a)) => Some(PrefixRef {
                nick: &raw[..a],
                user: None,
                host: Some(&raw[a + 1..]),
            }),
            (None, None) => Some(PrefixRef {
                nick: raw,
                user: None,
                host: None,
            }),
        }
    }

    /// Copy the prefix into owned storage.
    pub fn to_owned(self) -> Prefix {
        Prefix {
            nick: self.nick.to_string(),
            user: self.user.map(str::to_string),
            host: self.host.map(str::to_string),
        }
    }
}

impl fmt::Display for PrefixRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nick)?;
        if let Some(user) = self.user {
            write!(f, "!{}", user)?;
        }
        if let Some(host) = self.host {
            write!(f, "@{}", host)?;
        }
        Ok(())
    }
}

/// An owned, decomposed message prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefix {
    /// Nickname or server name.
    pub nick: String,
    /// Username, when present.
    pub user: Option<String>,
    /// Hostname, when present.
    pub host: Option<String>,
}

impl Prefix {
    /// Build a full `nick!user@host` prefix.
    pub fn new(nick: &str, user: &str, host: &str) -> Prefix {
        Prefix {
            nick: nick.to_string(),
            user: Some(user.to_string()),
            host: Some(host.to_string()),
        }
    }

    /// Build a bare nickname (or server name) prefix.
    pub fn nickname(nick: &str) -> Prefix {
        Prefix {
            nick: nick.to_string(),
            user: None,
            host: None,
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nick)?;
        if let Some(user) = &self.user {
            write!(f, "!{}", user)?;
        }
        if let Some(host) = &self.host {
            write!(f, "@{}", host)?;
        }
        Ok(())
    }
}
