//! Typed, owned IRC messages.
//!
//! [`Event`] is the discriminated union the host handler works with: one
//! variant per supported command, carrying exactly the semantic fields that
//! command needs. [`Message`] pairs an event with its optional origin
//! prefix. Both are fully owned so they can be handed to callback worker
//! threads without borrowing the session's line buffer.

#![allow(non_camel_case_types)]

use std::fmt;

use crate::prefix::Prefix;

/// A typed IRC event with its semantic payload.
///
/// The `Display` implementation renders the client-to-server wire form
/// (without the CRLF terminator); it is what the writer thread and the
/// session emitters send.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
#[non_exhaustive]
pub enum Event {
    /// `JOIN channels`
    JOIN(String),
    /// `NICK nickname [hopcount]`
    NICK(String, Option<u8>),
    /// `NOTICE targets :text`
    NOTICE(String, String),
    /// `PART channels :reason`
    PART(String, Option<String>),
    /// `PRIVMSG targets :text`
    PRIVMSG(String, String),
    /// `QUIT :reason`
    QUIT(Option<String>),
    /// `TOPIC channel [:text]`
    TOPIC(String, Option<String>),

    /// 331 - no topic is set
    RPL_NOTOPIC {
        /// Nick the reply is addressed to.
        nick: String,
        /// Channel the reply concerns.
        channel: String,
        /// Human-readable reply text.
        text: String,
    },
    /// 332 - channel topic
    RPL_TOPIC {
        /// Nick the reply is addressed to.
        nick: String,
        /// Channel the reply concerns.
        channel: String,
        /// The topic.
        text: String,
    },
    /// 482 - channel operator privileges needed
    ERR_CHANOPRIVSNEEDED {
        /// Nick the error is addressed to.
        nick: String,
        /// Channel the error concerns.
        channel: String,
        /// Human-readable error text.
        text: String,
    },
    /// 403 - no such channel
    ERR_NOSUCHCHANNEL {
        /// Nick the error is addressed to.
        nick: String,
        /// The channel that does not exist.
        channel: String,
        /// Human-readable error text.
        text: String,
    },
    /// 432 - erroneous nickname
    ERR_ERRONEUSNICKNAME {
        /// Nick the error is addressed to.
        nick: String,
        /// The rejected nickname.
        new_nick: String,
        /// Human-readable error text.
        text: String,
    },
    /// 401 - no such nick
    ERR_NOSUCHNICK {
        /// Nick the error is addressed to.
        nick: String,
        /// The nickname that was not found.
        supplied_nick: String,
        /// Human-readable error text.
        text: String,
    },
}

impl Event {
    /// True for server numeric replies, which have no client emitter.
    pub fn is_reply(&self) -> bool {
        matches!(
            self,
            Event::RPL_NOTOPIC { .. }
                | Event::RPL_TOPIC { .. }
                | Event::ERR_CHANOPRIVSNEEDED { .. }
                | Event::ERR_NOSUCHCHANNEL { .. }
                | Event::ERR_ERRONEUSNICKNAME { .. }
                | Event::ERR_NOSUCHNICK { .. }
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::JOIN(channels) => write!(f, "JOIN {}", channels),
            Event::NICK(nickname, None) => write!(f, "NICK {}", nickname),
            Event::NICK(nickname, Some(hopcount)) => {
                write!(f, "NICK {} {}", nickname, hopcount)
            }
            Event::NOTICE(targets, text) => write!(f, "NOTICE {} :{}", targets, text),
            Event::PART(channels, reason) => {
                write!(f, "PART {} :{}", channels, reason.as_deref().unwrap_or(""))
            }
            Event::PRIVMSG(targets, text) => write!(f, "PRIVMSG {} :{}", targets, text),
            Event::QUIT(reason) => write!(f, "QUIT :{}", reason.as_deref().unwrap_or("")),
            // Empty topic text is a query, not a clear.
            Event::TOPIC(channel, Some(text)) if !text.is_empty() => {
                write!(f, "TOPIC {} :{}", channel, text)
            }
            Event::TOPIC(channel, _) => write!(f, "TOPIC {}", channel),

            Event::RPL_NOTOPIC {
                nick,
                channel,
                text,
            } => write!(f, "331 {} {} :{}", nick, channel, text),
            Event::RPL_TOPIC {
                nick,
                channel,
                text,
            } => write!(f, "332 {} {} :{}", nick, channel, text),
            Event::ERR_CHANOPRIVSNEEDED {
                nick,
                channel,
                text,
            } => write!(f, "482 {} {} :{}", nick, channel, text),
            Event::ERR_NOSUCHCHANNEL {
                nick,
                channel,
                text,
            } => write!(f, "403 {} {} :{}", nick, channel, text),
            Event::ERR_ERRONEUSNICKNAME {
                nick,
                new_nick,
                text,
            } => write!(f, "432 {} {} :{}", nick, new_nick, text),
            Event::ERR_NOSUCHNICK {
                nick,
                supplied_nick,
                text,
            } => write!(f, "401 {} {} :{}", nick, supplied_nick, text),
        }
    }
}

/// A typed message: an [`Event`] plus its optional origin prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Where the message came from, when the server supplied a prefix.
    pub prefix: Option<Prefix>,
    /// The typed payload.
    pub event: Event,
}

impl Message {
    /// Wrap an event with no prefix (the usual shape for outbound replies).
    pub fn from_event(event: Event) -> Message {
        Message {
            prefix: None,
            event,
        }
    }

    /// Build a `PRIVMSG` reply.
    pub fn privmsg(targets: &str, text: &str) -> Message {
        Message::from_event(Event::PRIVMSG(targets.to_string(), text.to_string()))
    }

    /// Build a `NOTICE` reply.
    pub fn notice(targets: &str, text: &str) -> Message {
        Message::from_event(Event::NOTICE(targets.to_string(), text.to_string()))
    }

    /// Build a `JOIN` reply.
    pub fn join(channels: &str) -> Message {
        Message::from_event(Event::JOIN(channels.to_string()))
    }

    /// Build a `PART` reply.
    pub fn part(channels: &str, reason: Option<&str>) -> Message {
        Message::from_event(Event::PART(
            channels.to_string(),
            reason.map(str::to_string),
        ))
    }

    /// Build a `QUIT` reply.
    pub fn quit(reason: Option<&str>) -> Message {
        Message::from_event(Event::QUIT(reason.map(str::to_string)))
    }

    /// Build a `TOPIC` reply.
    pub fn topic(channel: &str, text: Option<&str>) -> Message {
        Message::from_event(Event::TOPIC(channel.to_string(), text.map(str::to_string)))
    }

    /// Build a `NICK` reply.
    pub fn nick(nickname: &str) -> Message {
        Message::from_event(Event::NICK(nickname.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privmsg_wire_form() {
        let event = Event::PRIVMSG("#chan".to_string(), "hello world".to_string());
        assert_eq!(event.to_string(), "PRIVMSG #chan :hello world");
    }

    #[test]
    fn test_part_always_has_trailing() {
        let event = Event::PART("#chan".to_string(), None);
        assert_eq!(event.to_string(), "PART #chan :");

        let event = Event::PART("#chan".to_string(), Some("bye".to_string()));
        assert_eq!(event.to_string(), "PART #chan :bye");
    }

    #[test]
    fn test_quit_always_has_trailing() {
        assert_eq!(Event::QUIT(None).to_string(), "QUIT :");
        assert_eq!(
            Event::QUIT(Some("gone".to_string())).to_string(),
            "QUIT :gone"
        );
    }

    #[test]
    fn test_topic_empty_text_is_query() {
        let query = Event::TOPIC("#chan".to_string(), None);
        assert_eq!(query.to_string(), "TOPIC #chan");

        let empty = Event::TOPIC("#chan".to_string(), Some(String::new()));
        assert_eq!(empty.to_string(), "TOPIC #chan");

        let set = Event::TOPIC("#chan".to_string(), Some("new topic".to_string()));
        assert_eq!(set.to_string(), "TOPIC #chan :new topic");
    }

    #[test]
    fn test_nick_with_hopcount() {
        assert_eq!(
            Event::NICK("mynick".to_string(), Some(255)).to_string(),
            "NICK mynick 255"
        );
        assert_eq!(Event::NICK("mynick".to_string(), None).to_string(), "NICK mynick");
    }

    #[test]
    fn test_reply_classification() {
        assert!(Event::RPL_TOPIC {
            nick: "n".to_string(),
            channel: "#c".to_string(),
            text: "t".to_string(),
        }
        .is_reply());
        assert!(!Event::PRIVMSG("#c".to_string(), "t".to_string()).is_reply());
    }

    #[test]
    fn test_constructors_have_no_prefix() {
        let msg = Message::privmsg("#chan", "hi");
        assert_eq!(msg.prefix, None);
        assert_eq!(msg.event, Event::PRIVMSG("#chan".to_string(), "hi".to_string()));
    }
}
