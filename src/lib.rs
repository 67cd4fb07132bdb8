//! # slirc-client
//!
//! An embeddable IRC client library (RFC 1459 / 2812 dialect) for bots and
//! interactive clients.
//!
//! ## Features
//!
//! - Zero-copy message parsing with borrowed record types
//! - A typed, discriminated message surface for host callbacks
//! - Blocking session loop: reader on the caller's thread, writer on a
//!   worker thread, replies funnelled through a shared queue
//! - TCP or TLS transport (system certificate store)
//! - Automatic PONG replies and end-of-MOTD channel joins
//!
//! ## Quick Start
//!
//! ### Parsing IRC lines
//!
//! ```rust
//! use slirc_client::{Event, MessageRef};
//!
//! let msg = MessageRef::parse(":nick!user@host PRIVMSG #rust :Hello!").unwrap();
//! let typed = msg.to_message().unwrap();
//!
//! assert_eq!(typed.prefix.unwrap().nick, "nick");
//! assert_eq!(
//!     typed.event,
//!     Event::PRIVMSG("#rust".to_string(), "Hello!".to_string())
//! );
//! ```
//!
//! ### Running a session
//!
//! ```no_run
//! use slirc_client::{Config, Event, Handler, Message, Session};
//!
//! struct Greeter;
//!
//! impl Handler for Greeter {
//!     fn on_message(&self, message: &Message) -> Option<Message> {
//!         match &message.event {
//!             Event::PRIVMSG(target, text) if text.contains("hello") => {
//!                 Some(Message::privmsg(target, "Hello there!"))
//!             }
//!             _ => None,
//!         }
//!     }
//! }
//!
//! fn main() -> slirc_client::Result<()> {
//!     let mut session = Session::new(Config {
//!         nick: "greeter_bot".to_string(),
//!         user: "greeter".to_string(),
//!         real_name: "Greeter Bot".to_string(),
//!         server: "irc.libera.chat".to_string(),
//!         channels: vec!["#greetings".to_string()],
//!         ..Config::default()
//!     });
//!
//!     session.connect()?;
//!     session.register()?;
//!     session.run(Greeter)
//! }
//! ```

#![deny(clippy::all)]

pub mod client;
pub mod command;
pub mod error;
pub mod event;
pub mod message;
pub mod params;
pub mod prefix;
pub mod response;

pub use self::client::{Config, Handler, Session};
pub use self::command::Command;
pub use self::error::{ClientError, MessageParseError, Result};
pub use self::event::{Event, Message};
pub use self::message::MessageRef;
pub use self::params::Params;
pub use self::prefix::{Prefix, PrefixRef};
pub use self::response::Response;

/// Maximum length of one wire line, including the CRLF terminator.
pub const MAX_LINE_LEN: usize = 512;
