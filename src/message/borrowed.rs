use crate::command::Command;
use crate::error::MessageParseError;
use crate::event::{Event, Message};
use crate::params::Params;
use crate::prefix::PrefixRef;
use crate::response::Response;
use crate::MAX_LINE_LEN;

use super::nom_parser::split_line;

/// A parsed IRC line with borrowed components.
///
/// `MessageRef` borrows from the raw line buffer and must not outlive it;
/// [`MessageRef::to_message`] copies the payload into an owned [`Message`]
/// before it crosses a thread boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageRef<'a> {
    /// Decomposed origin, when the line carried a well-formed prefix.
    pub prefix: Option<PrefixRef<'a>>,
    /// The recognised command tag.
    pub command: Command,
    /// Lazy cursor over the parameter segment.
    pub params: Params<'a>,
    /// The line as received (untrimmed).
    pub raw: &'a str,
}

impl<'a> MessageRef<'a> {
    /// Parse one wire line.
    ///
    /// Whitespace is trimmed from both ends first. Fails on lines shorter
    /// than three bytes after trimming, lines over the 512-byte limit, and
    /// commands outside the recognised taxonomy. A malformed prefix token
    /// does not fail the parse; it decomposes to an absent prefix.
    pub fn parse(s: &'a str) -> Result<MessageRef<'a>, MessageParseError> {
        let trimmed = s.trim_matches(|c: char| c.is_ascii_whitespace());
        if trimmed.len() < 3 {
            return Err(MessageParseError::TooShort);
        }
        if trimmed.len() > MAX_LINE_LEN {
            return Err(MessageParseError::TooLong(trimmed.len()));
        }

        let (_, split) = split_line(trimmed).map_err(|_| MessageParseError::MissingCommand)?;
        let command = split.command.parse::<Command>()?;
        let prefix = split.prefix.and_then(PrefixRef::parse);

        Ok(MessageRef {
            prefix,
            command,
            params: Params::new(split.params),
            raw: s,
        })
    }

    /// Lift this record into a typed, owned [`Message`].
    ///
    /// Pulls fields from a fresh copy of the parameter cursor. Missing
    /// string fields default to empty; optional reasons and topic text
    /// default to absent; a hopcount that fails to parse as `u8` is
    /// absent. Commands without a typed projection yield `None`.
    pub fn to_message(&self) -> Option<Message> {
        let mut params = self.params;

        let event = match self.command {
            Command::JOIN => Event::JOIN(next_or_empty(&mut params)),
            Command::NICK => {
                let nickname = next_or_empty(&mut params);
                let hopcount = params.next().and_then(|field| field.parse::<u8>().ok());
                Event::NICK(nickname, hopcount)
            }
            Command::NOTICE => {
                Event::NOTICE(next_or_empty(&mut params), next_or_empty(&mut params))
            }
            Command::PART => Event::PART(
                next_or_empty(&mut params),
                params.next().map(str::to_string),
            ),
            Command::PRIVMSG => {
                Event::PRIVMSG(next_or_empty(&mut params), next_or_empty(&mut params))
            }
            Command::QUIT => Event::QUIT(params.next().map(str::to_string)),
            Command::TOPIC => Event::TOPIC(
                next_or_empty(&mut params),
                params.next().map(str::to_string),
            ),

            Command::Reply(Response::RPL_NOTOPIC) => Event::RPL_NOTOPIC {
                nick: next_or_empty(&mut params),
                channel: next_or_empty(&mut params),
                text: next_or_empty(&mut params),
            },
            Command::Reply(Response::RPL_TOPIC) => Event::RPL_TOPIC {
                nick: next_or_empty(&mut params),
                channel: next_or_empty(&mut params),
                text: next_or_empty(&mut params),
            },
            Command::Reply(Response::ERR_CHANOPRIVSNEEDED) => Event::ERR_CHANOPRIVSNEEDED {
                nick: next_or_empty(&mut params),
                channel: next_or_empty(&mut params),
                text: next_or_empty(&mut params),
            },
            Command::Reply(Response::ERR_NOSUCHCHANNEL) => Event::ERR_NOSUCHCHANNEL {
                nick: next_or_empty(&mut params),
                channel: next_or_empty(&mut params),
                text: next_or_empty(&mut params),
            },
            Command::Reply(Response::ERR_ERRONEUSNICKNAME) => Event::ERR_ERRONEUSNICKNAME {
                nick: next_or_empty(&mut params),
                new_nick: next_or_empty(&mut params),
                text: next_or_empty(&mut params),
            },
            Command::Reply(Response::ERR_NOSUCHNICK) => Event::ERR_NOSUCHNICK {
                nick: next_or_empty(&mut params),
                supplied_nick: next_or_empty(&mut params),
                text: next_or_empty(&mut params),
            },

            _ => return None,
        };

        Some(Message {
            prefix: self.prefix.map(PrefixRef::to_owned),
            event,
        })
    }
}

fn next_or_empty(params: &mut Params<'_>) -> String {
    params.next().unwrap_or("").to_string()
}
