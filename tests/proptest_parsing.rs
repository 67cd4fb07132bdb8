//! Property tests for the parameter iterator and line parser.

use proptest::prelude::*;

use slirc_client::{MessageRef, Params};

proptest! {
    /// The field sequence is a pure function of the segment, and a `Copy`
    /// of the cursor restarts it.
    #[test]
    fn params_iteration_is_deterministic(segment in "[ -~]{0,80}") {
        let params = Params::new(Some(segment.as_str()));
        let first: Vec<&str> = params.collect();
        let second: Vec<&str> = params.collect();
        let fresh: Vec<&str> = Params::new(Some(segment.as_str())).collect();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &fresh);
    }

    /// A field that starts with `:` consumes the entire remainder, spaces
    /// and further colons included.
    #[test]
    fn trailing_field_consumes_remainder(head in "[a-zA-Z#,]{1,12}", tail in "[ -~]{0,40}") {
        let segment = format!("{} :{}", head, tail);
        let fields: Vec<&str> = Params::new(Some(segment.as_str())).collect();
        prop_assert_eq!(fields.len(), 2);
        prop_assert_eq!(fields[0], head.as_str());
        prop_assert_eq!(fields[1], tail.as_str());
    }

    /// Middle fields never contain the separator.
    #[test]
    fn middle_fields_contain_no_spaces(segment in "[a-z ]{0,80}") {
        for field in Params::new(Some(segment.as_str())) {
            prop_assert!(!field.contains(' '));
        }
    }

    /// The parser never panics, whatever the input.
    #[test]
    fn parse_never_panics(line in "\\PC{0,600}") {
        let _ = MessageRef::parse(&line);
    }

    /// Well-formed PRIVMSG lines always parse and lift.
    #[test]
    fn privmsg_lines_lift(target in "#[a-z]{1,10}", text in "[ -~]{0,60}") {
        let line = format!(":nick!user@host PRIVMSG {} :{}", target, text);
        let msg = MessageRef::parse(&line).unwrap();
        let typed = msg.to_message().unwrap();
        match typed.event {
            slirc_client::Event::PRIVMSG(t, x) => {
                prop_assert_eq!(t, target);
                prop_assert_eq!(x, text);
            }
            other => prop_assert!(false, "unexpected event: {:?}", other),
        }
    }
}
