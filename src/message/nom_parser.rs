//! Nom-based IRC line splitter.
//!
//! Splits one already-trimmed line into its raw components: optional prefix
//! token, command token, and the untouched parameter segment. Everything is
//! a borrowed slice of the input; parameters are consumed lazily by
//! [`crate::Params`], not tokenised here.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    combinator::opt,
    error::{context, VerboseError},
    sequence::preceded,
    IResult,
};

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

/// Parse the message prefix (the part after `:` and before the first space).
fn parse_prefix(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message prefix",
        preceded(char(':'), take_while1(|c| c != ' ')),
    )(input)
}

/// Parse the command token (everything up to the next space).
fn parse_command(input: &str) -> ParseResult<&str, &str> {
    context("parsing IRC command", take_while1(|c| c != ' '))(input)
}

/// A raw line split into components, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SplitLine<'a> {
    /// Raw prefix token (without the leading `:`), if present.
    pub prefix: Option<&'a str>,
    /// The command token, not yet validated against the taxonomy.
    pub command: &'a str,
    /// The parameter segment: everything after the single space following
    /// the command. `None` when absent or empty.
    pub params: Option<&'a str>,
}

/// Split a trimmed IRC line.
///
/// IRC message format:
/// ```text
/// [:prefix] <command> [params...] [:trailing]
/// ```
pub(crate) fn split_line(input: &str) -> ParseResult<&str, SplitLine<'_>> {
    let (input, prefix) = context("parsing optional prefix", opt(parse_prefix))(input)?;
    let (input, _) = space0(input)?;
    let (rest, command) = parse_command(input)?;

    let params = match rest.strip_prefix(' ') {
        Some("") | None => None,
        Some(segment) => Some(segment),
    };

    Ok((
        "",
        SplitLine {
            prefix,
            command,
            params,
        },
    ))
}
