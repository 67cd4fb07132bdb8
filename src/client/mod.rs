//! The connection session and its event loop.
//!
//! A [`Session`] owns one connection through its whole lifecycle:
//! constructed, connected, registered, looping, disconnected. Every
//! transition is an explicit call; there is no implicit reconnection.
//!
//! [`Session::run`] drives the loop: the reader stays on the caller's
//! thread, a writer thread drains the reply queue, and each inbound typed
//! message is dispatched to the host [`Handler`] either inline or on a
//! detached worker, at the handler's choice.

mod config;
mod line;
mod queue;
mod transport;

pub use self::config::Config;

use std::sync::Arc;
use std::thread;

use tracing::{debug, trace, warn};

use crate::command::Command;
use crate::error::{ClientError, Result};
use crate::event::{Event, Message};
use crate::message::MessageRef;
use crate::response::Response;

use self::line::LineReader;
use self::queue::ReplyQueue;
use self::transport::Transport;

/// Host-side hooks for the event loop.
///
/// Both methods have defaults: a handler that overrides neither receives
/// nothing and spawns nothing, leaving only the session's automatic
/// behavior (PONG replies and end-of-MOTD joins).
pub trait Handler: Send + Sync {
    /// Called once per inbound typed message, in wire order. Return a
    /// reply to have the writer thread send it.
    fn on_message(&self, message: &Message) -> Option<Message> {
        let _ = message;
        None
    }

    /// When true, `on_message` for this message runs on a freshly spawned,
    /// detached worker thread instead of the reader thread. Replies from
    /// slow workers may be sent after replies to later messages.
    fn spawn_thread(&self, message: &Message) -> bool {
        let _ = message;
        false
    }
}

/// An IRC connection session.
pub struct Session {
    config: Config,
    transport: Option<Transport>,
    queue: Arc<ReplyQueue>,
}

impl Session {
    /// Create a disconnected session.
    pub fn new(config: Config) -> Session {
        Session {
            config,
            transport: None,
            queue: Arc::new(ReplyQueue::new()),
        }
    }

    /// The configuration this session was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve the configured server and connect, completing the TLS
    /// handshake when configured.
    pub fn connect(&mut self) -> Result<()> {
        let transport = Transport::connect(&self.config.server, self.config.port, self.config.tls)?;
        self.transport = Some(transport);
        self.queue = Arc::new(ReplyQueue::new());
        Ok(())
    }

    /// Close the connection. Idempotent; safe to call when never
    /// connected.
    pub fn disconnect(&mut self) {
        if let Some(transport) = self.transport.take() {
            transport.close();
        }
        self.queue.close();
    }

    /// Send the registration handshake as one write. The session is
    /// considered registered once the write succeeds; it does not wait
    /// for RPL_WELCOME.
    pub fn register(&self) -> Result<()> {
        let line = format!(
            "NICK {}\r\nUSER {} * * :{}\r\n",
            self.config.nick, self.config.user, self.config.real_name
        );
        self.send_raw(&line)
    }

    /// Send `NICK <nickname>`, with the vestigial hopcount when given.
    pub fn nick(&self, nickname: &str, hopcount: Option<u8>) -> Result<()> {
        self.send(&Event::NICK(nickname.to_string(), hopcount))
    }

    /// Send `JOIN <channels>` (comma-separated lists are the server's
    /// concern).
    pub fn join(&self, channels: &str) -> Result<()> {
        self.send(&Event::JOIN(channels.to_string()))
    }

    /// Send `PART <channels> :<reason>` (empty reason when absent).
    pub fn part(&self, channels: &str, reason: Option<&str>) -> Result<()> {
        self.send(&Event::PART(
            channels.to_string(),
            reason.map(str::to_string),
        ))
    }

    /// Send `PRIVMSG <targets> :<text>`.
    pub fn privmsg(&self, targets: &str, text: &str) -> Result<()> {
        self.send(&Event::PRIVMSG(targets.to_string(), text.to_string()))
    }

    /// Send `NOTICE <targets> :<text>`.
    pub fn notice(&self, targets: &str, text: &str) -> Result<()> {
        self.send(&Event::NOTICE(targets.to_string(), text.to_string()))
    }

    /// Send `QUIT :<reason>` (empty reason when absent).
    pub fn quit(&self, reason: Option<&str>) -> Result<()> {
        self.send(&Event::QUIT(reason.map(str::to_string)))
    }

    /// Send `TOPIC <channel> :<text>`, or the query form `TOPIC <channel>`
    /// when the text is absent or empty.
    pub fn topic(&self, channel: &str, text: Option<&str>) -> Result<()> {
        self.send(&Event::TOPIC(channel.to_string(), text.map(str::to_string)))
    }

    fn pong(&self, id: &str) -> Result<()> {
        self.send_raw(&format!("PONG :{}\r\n", id))
    }

    fn send(&self, event: &Event) -> Result<()> {
        self.send_raw(&format!("{}\r\n", event))
    }

    fn send_raw(&self, line: &str) -> Result<()> {
        let transport = self.transport.as_ref().ok_or(ClientError::NotConnected)?;
        trace!(line = line.trim_end(), "send");
        transport
            .write_all(line.as_bytes())
            .map_err(ClientError::Write)
    }

    /// Run the event loop until the server closes the connection or the
    /// reader hits a fatal error. Blocks the calling thread.
    ///
    /// The writer thread is spawned detached; a write failure terminates
    /// it and leaves the session write-dead while the reader continues.
    pub fn run<H>(&mut self, handler: H) -> Result<()>
    where
        H: Handler + 'static,
    {
        let transport = self.transport.clone().ok_or(ClientError::NotConnected)?;

        let writer_queue = Arc::clone(&self.queue);
        let writer_transport = transport.clone();
        thread::Builder::new()
            .name("irc-writer".to_string())
            .spawn(move || writer_loop(writer_transport, writer_queue))
            .map_err(|source| ClientError::ThreadSpawn {
                name: "writer",
                source,
            })?;

        let handler = Arc::new(handler);
        let mut lines = LineReader::new(transport);
        let result = loop {
            match lines.read_line() {
                Ok(Some(line)) => {
                    let text = String::from_utf8_lossy(&line);
                    if let Err(err) = self.handle_line(&text, &handler) {
                        break Err(err);
                    }
                }
                Ok(None) => break Ok(()),
                Err(err) => break Err(err),
            }
        };

        self.queue.close();
        result
    }

    /// Inbound dispatch for one framed line.
    fn handle_line<H>(&self, line: &str, handler: &Arc<H>) -> Result<()>
    where
        H: Handler + 'static,
    {
        trace!(line, "recv");
        if line.len() < 4 {
            return Ok(());
        }

        // Keepalive is answered before any parsing or dispatch.
        if line.as_bytes().starts_with(b"PING") {
            if let Some(colon) = line.find(':') {
                self.pong(&line[colon + 1..])?;
            }
            return Ok(());
        }

        let msg = match MessageRef::parse(line) {
            Ok(msg) => msg,
            Err(err) => {
                debug!(%err, line, "dropping unparseable line");
                return Ok(());
            }
        };

        // End of MOTD marks the connection ready; join the configured
        // channels in order. There is no joined flag, so a repeated 376
        // re-joins.
        if msg.command == Command::Reply(Response::RPL_ENDOFMOTD) {
            for channel in &self.config.channels {
                self.join(channel)?;
            }
        }

        if let Some(message) = msg.to_message() {
            self.dispatch(handler, message);
        }
        Ok(())
    }

    fn dispatch<H>(&self, handler: &Arc<H>, message: Message)
    where
        H: Handler + 'static,
    {
        if handler.spawn_thread(&message) {
            let handler = Arc::clone(handler);
            let queue = Arc::clone(&self.queue);
            let spawned = thread::Builder::new()
                .name("irc-worker".to_string())
                .spawn(move || {
                    if let Some(reply) = handler.on_message(&message) {
                        queue.push(reply);
                    }
                });
            if let Err(err) = spawned {
                warn!(%err, "failed to spawn callback worker; message dropped");
            }
        } else if let Some(reply) = handler.on_message(&message) {
            self.queue.push(reply);
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.disconnect();
    }
}

fn writer_loop(transport: Transport, queue: Arc<ReplyQueue>) {
    while let Some(message) = queue.pop() {
        if message.event.is_reply() {
            debug!(event = %message.event, "ignoring server numeric in reply queue");
            continue;
        }
        let line = format!("{}\r\n", message.event);
        if let Err(err) = transport.write_all(line.as_bytes()) {
            warn!(%err, "reply write failed; writer thread terminating");
            return;
        }
    }
}
