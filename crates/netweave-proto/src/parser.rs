//! Nom-based IRC line parser.
//!
//! Parses a single line (terminator optional) into its prefix, command,
//! and parameter components without allocating. The grammar is the
//! classic client-protocol form:
//!
//! ```text
//! [":" prefix SPACE] command [params...] [SPACE ":" trailing]
//! ```

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    combinator::opt,
    sequence::preceded,
    IResult,
};
use smallvec::SmallVec;

use crate::error::ProtocolError;

/// Parse the message prefix (the part after `:` and before the first space).
fn parse_prefix(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_while1(|c| c != ' '))(input)
}

/// Parse the command token (1*letter or exactly 3 digits).
fn parse_command(input: &str) -> IResult<&str, &str> {
    let (rest, cmd) = take_while1(|c: char| c.is_alphanumeric())(input)?;

    let is_all_letters = cmd.chars().all(|c| c.is_ascii_alphabetic());
    let is_three_digits = cmd.len() == 3 && cmd.chars().all(|c| c.is_ascii_digit());

    if is_all_letters || is_three_digits {
        Ok((rest, cmd))
    } else {
        Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::AlphaNumeric,
        )))
    }
}

/// Parse the parameter list following the command.
///
/// Space-separated words, except that a parameter beginning with `:`
/// consumes the remainder of the line verbatim (the trailing rule).
/// Runs of spaces collapse into a single separator.
fn parse_params(input: &str) -> SmallVec<[&str; 15]> {
    let mut params: SmallVec<[&str; 15]> = SmallVec::new();
    let mut rest = input;

    while rest.as_bytes().first() == Some(&b' ') {
        while rest.as_bytes().first() == Some(&b' ') {
            rest = &rest[1..];
        }

        if rest.is_empty() || rest.starts_with('\r') || rest.starts_with('\n') {
            break;
        }

        if let Some(after_colon) = rest.strip_prefix(':') {
            let end = after_colon.find(['\r', '\n']).unwrap_or(after_colon.len());
            params.push(&after_colon[..end]);
            break;
        }

        let end = rest.find([' ', '\r', '\n']).unwrap_or(rest.len());
        params.push(&rest[..end]);
        rest = &rest[end..];
        if rest.starts_with(['\r', '\n']) {
            break;
        }
    }

    params
}

/// Nom entry point: prefix, command, then the parameter sweep.
fn parse_line(input: &str) -> IResult<&str, ParsedLine<'_>> {
    let (input, prefix) = opt(parse_prefix)(input)?;
    let (input, _) = space0(input)?;
    let (input, command) = parse_command(input)?;
    let params = parse_params(input);

    Ok((
        "",
        ParsedLine {
            prefix,
            command,
            params,
        },
    ))
}

/// A parsed IRC line with borrowed string slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// Raw prefix string (without the leading `:`), if present.
    pub prefix: Option<&'a str>,
    /// The command token, verbatim.
    pub command: &'a str,
    /// Command parameters, including the trailing parameter.
    pub params: SmallVec<[&'a str; 15]>,
}

impl<'a> ParsedLine<'a> {
    /// Parse a line into its components.
    ///
    /// A trailing `\r\n` or bare `\n` is tolerated and ignored.
    pub fn parse(input: &'a str) -> Result<Self, ProtocolError> {
        if input.trim_end_matches(['\r', '\n']).is_empty() {
            return Err(ProtocolError::EmptyLine);
        }

        match parse_line(input) {
            Ok((_, line)) => Ok(line),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                Err(ProtocolError::InvalidMessage {
                    line: input.to_owned(),
                    position: input.len() - e.input.len(),
                })
            }
            Err(nom::Err::Incomplete(_)) => Err(ProtocolError::InvalidMessage {
                line: input.to_owned(),
                position: input.len(),
            }),
        }
    }

    /// The command's numeric value, if it is a three-digit reply code.
    pub fn numeric(&self) -> Option<u16> {
        if self.command.len() == 3 && self.command.bytes().all(|b| b.is_ascii_digit()) {
            self.command.parse().ok()
        } else {
            None
        }
    }

    /// Parameter at `index`, if present.
    pub fn param(&self, index: usize) -> Option<&'a str> {
        self.params.get(index).copied()
    }
}
