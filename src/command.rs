//! The closed set of IRC commands this client recognises.
//!
//! A command tag is either an uppercase text mnemonic or a three-digit
//! numeric (carried as a [`Response`]). Lines whose command falls outside
//! this taxonomy fail to parse and are dropped by the session loop.

use std::fmt;
use std::str::FromStr;

use crate::error::MessageParseError;
use crate::response::Response;

/// A recognised IRC command tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
#[non_exhaustive]
pub enum Command {
    /// `AWAY [message]`
    AWAY,
    /// `INVITE nickname channel`
    INVITE,
    /// `ISON nicknames...`
    ISON,
    /// `JOIN channels`
    JOIN,
    /// `MODE target [modes]`
    MODE,
    /// `MOTD [target]`
    MOTD,
    /// `NICK nickname [hopcount]`
    NICK,
    /// `NOTICE targets text`
    NOTICE,
    /// `PART channels [message]`
    PART,
    /// `PING id`
    PING,
    /// `PONG id`
    PONG,
    /// `PRIVMSG targets text`
    PRIVMSG,
    /// `QUIT [message]`
    QUIT,
    /// `TOPIC channel [topic]`
    TOPIC,
    /// `WHO [mask]`
    WHO,
    /// `WHOIS nickmasks`
    WHOIS,
    /// `WHOWAS nickname`
    WHOWAS,
    /// A numeric server response.
    Reply(Response),
}

impl Command {
    /// True for numeric server responses.
    pub fn is_reply(&self) -> bool {
        matches!(self, Command::Reply(_))
    }
}

impl FromStr for Command {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Ok(match upper.as_str() {
            "AWAY" => Command::AWAY,
            "INVITE" => Command::INVITE,
            "ISON" => Command::ISON,
            "JOIN" => Command::JOIN,
            "MODE" => Command::MODE,
            "MOTD" => Command::MOTD,
            "NICK" => Command::NICK,
            "NOTICE" => Command::NOTICE,
            "PART" => Command::PART,
            "PING" => Command::PING,
            "PONG" => Command::PONG,
            "PRIVMSG" => Command::PRIVMSG,
            "QUIT" => Command::QUIT,
            "TOPIC" => Command::TOPIC,
            "WHO" => Command::WHO,
            "WHOIS" => Command::WHOIS,
            "WHOWAS" => Command::WHOWAS,
            _ => match upper.parse::<Response>() {
                Ok(resp) => Command::Reply(resp),
                Err(_) => return Err(MessageParseError::UnknownCommand(s.to_string())),
            },
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AWAY => f.write_str("AWAY"),
            Command::INVITE => f.write_str("INVITE"),
            Command::ISON => f.write_str("ISON"),
            Command::JOIN => f.write_str("JOIN"),
            Command::MODE => f.write_str("MODE"),
            Command::MOTD => f.write_str("MOTD"),
            Command::NICK => f.write_str("NICK"),
            Command::NOTICE => f.write_str("NOTICE"),
            Command::PART => f.write_str("PART"),
            Command::PING => f.write_str("PING"),
            Command::PONG => f.write_str("PONG"),
            Command::PRIVMSG => f.write_str("PRIVMSG"),
            Command::QUIT => f.write_str("QUIT"),
            Command::TOPIC => f.write_str("TOPIC"),
            Command::WHO => f.write_str("WHO"),
            Command::WHOIS => f.write_str("WHOIS"),
            Command::WHOWAS => f.write_str("WHOWAS"),
            Command::Reply(resp) => write!(f, "{}", resp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mnemonics() {
        assert_eq!("PRIVMSG".parse::<Command>().unwrap(), Command::PRIVMSG);
        assert_eq!("JOIN".parse::<Command>().unwrap(), Command::JOIN);
        assert_eq!("WHOWAS".parse::<Command>().unwrap(), Command::WHOWAS);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("privmsg".parse::<Command>().unwrap(), Command::PRIVMSG);
        assert_eq!("Join".parse::<Command>().unwrap(), Command::JOIN);
    }

    #[test]
    fn test_parse_numerics() {
        assert_eq!(
            "332".parse::<Command>().unwrap(),
            Command::Reply(Response::RPL_TOPIC)
        );
        assert_eq!(
            "001".parse::<Command>().unwrap(),
            Command::Reply(Response::RPL_WELCOME)
        );
    }

    #[test]
    fn test_unknown_command_fails() {
        assert_eq!(
            "KICK".parse::<Command>(),
            Err(MessageParseError::UnknownCommand("KICK".to_string()))
        );
        assert_eq!(
            "999".parse::<Command>(),
            Err(MessageParseError::UnknownCommand("999".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::PRIVMSG.to_string(), "PRIVMSG");
        assert_eq!(Command::Reply(Response::RPL_ENDOFMOTD).to_string(), "376");
    }
}
