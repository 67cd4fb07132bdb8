//! RFC 1459 / 2812 parsing compliance tests.
//!
//! These exercise the documented parser guarantees: component round-trips,
//! prefix decomposition corner cases, the closed command taxonomy, and the
//! parameter iterator laws.

use slirc_client::{Command, Event, MessageParseError, MessageRef, Params, Response};

/// Decompose a line into comparable components: prefix text, command text,
/// parameter fields.
fn components(line: &str) -> (Option<String>, String, Vec<String>) {
    let msg = MessageRef::parse(line).expect("line should parse");
    (
        msg.prefix.map(|p| p.to_string()),
        msg.command.to_string(),
        msg.params.map(str::to_string).collect(),
    )
}

/// Rebuild a line from parsed components, using the trailing form for the
/// final parameter.
fn reassemble(line: &str) -> String {
    let msg = MessageRef::parse(line).expect("line should parse");
    let mut out = String::new();
    if let Some(prefix) = msg.prefix {
        out.push(':');
        out.push_str(&prefix.to_string());
        out.push(' ');
    }
    out.push_str(&msg.command.to_string());

    let fields: Vec<&str> = msg.params.collect();
    if let Some((last, middle)) = fields.split_last() {
        for field in middle {
            out.push(' ');
            out.push_str(field);
        }
        out.push_str(" :");
        out.push_str(last);
    }
    out
}

#[test]
fn test_component_round_trip() {
    for line in [
        ":nick!user@host PRIVMSG #channel :Hello, world!",
        ":server.name 001 nickname :Welcome to the network",
        "PING :irc.example.com",
        ":nick!user@host JOIN #channel",
        ":nick TOPIC #channel :new topic here",
        "NOTICE #chan :server notice",
    ] {
        let original = components(line);
        let rebuilt = components(&reassemble(line));
        assert_eq!(original, rebuilt, "components changed for {:?}", line);
    }
}

#[test]
fn test_missing_colon_means_absent_prefix() {
    let msg = MessageRef::parse("PRIVMSG #chan :hi").unwrap();
    assert!(msg.prefix.is_none());
    assert_eq!(msg.command, Command::PRIVMSG);
}

#[test]
fn test_malformed_prefix_token_decomposes_to_absent() {
    // The token parses as a prefix position but `!` follows `@`.
    let msg = MessageRef::parse(":nick@host!user PRIVMSG #chan :hi").unwrap();
    assert!(msg.prefix.is_none());
    assert_eq!(msg.command, Command::PRIVMSG);
}

#[test]
fn test_unrecognised_commands_fail() {
    for line in ["KICK #chan nick", "CAP LS 302", ":srv 433 n n :in use", "FOO"] {
        match MessageRef::parse(line) {
            Err(MessageParseError::UnknownCommand(_)) => {}
            other => panic!("expected UnknownCommand for {:?}, got {:?}", line, other),
        }
    }
}

#[test]
fn test_short_lines_fail() {
    for line in ["", " ", "ab", " ab \r\n"] {
        assert_eq!(
            MessageRef::parse(line),
            Err(MessageParseError::TooShort),
            "line {:?}",
            line
        );
    }
}

#[test]
fn test_numeric_taxonomy_is_closed() {
    // Recognised numerics parse; anything else is a parse error even if it
    // is a legal IRC numeric.
    assert_eq!(
        MessageRef::parse(":srv 353 n = #c :a b c").unwrap().command,
        Command::Reply(Response::RPL_NAMREPLY)
    );
    assert!(MessageRef::parse(":srv 372 n :motd line").is_err());
}

// === Iterator laws ===

#[test]
fn test_iterator_is_pure_over_segment() {
    let params = Params::new(Some("one two :three and four"));
    let a: Vec<&str> = params.collect();
    let b: Vec<&str> = params.collect();
    let c: Vec<&str> = Params::new(Some("one two :three and four")).collect();
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(a, vec!["one", "two", "three and four"]);
}

#[test]
fn test_trailing_field_takes_everything() {
    let fields: Vec<&str> = Params::new(Some("#c :a : b :: c ")).collect();
    assert_eq!(fields, vec!["#c", "a : b :: c "]);
}

#[test]
fn test_trailing_whitespace_is_not_a_field() {
    let fields: Vec<&str> = Params::new(Some("#a #b ")).collect();
    assert_eq!(fields, vec!["#a", "#b"]);
}

// === Typed projections (wire scenarios) ===

#[test]
fn test_join_with_full_prefix() {
    let typed = MessageRef::parse(":nick!u@h JOIN #chan")
        .unwrap()
        .to_message()
        .unwrap();
    let prefix = typed.prefix.unwrap();
    assert_eq!(prefix.nick, "nick");
    assert_eq!(prefix.user.as_deref(), Some("u"));
    assert_eq!(prefix.host.as_deref(), Some("h"));
    assert_eq!(typed.event, Event::JOIN("#chan".to_string()));
}

#[test]
fn test_quit_with_reason() {
    let typed = MessageRef::parse("QUIT :bye!").unwrap().to_message().unwrap();
    assert_eq!(typed.prefix, None);
    assert_eq!(typed.event, Event::QUIT(Some("bye!".to_string())));
}

#[test]
fn test_topic_reply() {
    let typed = MessageRef::parse(":srv 332 nick #chan :current topic")
        .unwrap()
        .to_message()
        .unwrap();
    assert_eq!(
        typed.event,
        Event::RPL_TOPIC {
            nick: "nick".to_string(),
            channel: "#chan".to_string(),
            text: "current topic".to_string(),
        }
    );
}

#[test]
fn test_nick_with_hopcount() {
    let typed = MessageRef::parse("NICK mynick 255")
        .unwrap()
        .to_message()
        .unwrap();
    assert_eq!(typed.event, Event::NICK("mynick".to_string(), Some(255)));
}

#[test]
fn test_end_of_motd_is_recognised_but_untyped() {
    let msg = MessageRef::parse(":srv 376 nick :End of /MOTD command.").unwrap();
    assert_eq!(msg.command, Command::Reply(Response::RPL_ENDOFMOTD));
    assert_eq!(msg.to_message(), None);
}
