//! Raw tokenization of command invocations.
//!
//! Turns an argument vector (command name first) into a [`RawParse`]: the
//! command name plus raw parameter values keyed either by the name typed
//! after a `-` or by a synthesized 1-based position. No schema is consulted
//! here; matching and validation happen in the resolver.
//!
//! Token rules, left to right:
//!
//! - token 0 is the command name; `help` ends tokenization as a
//!   registry-wide help request
//! - token 1 equal to `help` once its leading dashes are stripped
//!   (`-help`, `--help`) ends tokenization as a help request for the command
//! - a `-name` token captures the next token as its value unless that token
//!   also starts with `-` or input ends, in which case the value is empty
//! - any other token is stored under `1 + <number of raw parameters so far>`

use command_dispatch_core::{HELP_COMMAND, ParameterMap, fold_case};
use tracing::debug;

use crate::error::ParseError;

/// Intermediate tokenizer output.
///
/// `error` is set only when tokenization failed; the other fields then hold
/// whatever was read before the failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParse {
    /// Command name or alias exactly as typed (`help` for registry help).
    pub command_name: String,
    /// Raw values in input order.
    pub parameters: ParameterMap,
    /// `help` was the command, or `-help` followed the command.
    pub is_help_request: bool,
    pub error: Option<ParseError>,
}

impl RawParse {
    fn help(command_name: impl Into<String>) -> Self {
        Self {
            command_name: command_name.into(),
            is_help_request: true,
            ..Default::default()
        }
    }

    fn failed(command_name: impl Into<String>, error: ParseError) -> Self {
        Self {
            command_name: command_name.into(),
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Splits a console line on the space character.
///
/// Runs of spaces do not produce empty tokens. There is no quoting or
/// escaping.
///
/// # Examples
///
/// ```
/// use command_dispatch_engine::tokenizer::split_line;
///
/// assert_eq!(split_line("greet  -name Alice"), vec!["greet", "-name", "Alice"]);
/// assert!(split_line("   ").is_empty());
/// ```
pub fn split_line(line: &str) -> Vec<&str> {
    line.split(' ').filter(|t| !t.is_empty()).collect()
}

/// Tokenizes a console line. See [`split_line`] and [`tokenize`].
pub fn tokenize_line(line: &str) -> RawParse {
    tokenize(split_line(line))
}

/// Tokenizes an argument vector whose first element is the command name.
///
/// # Examples
///
/// ```
/// use command_dispatch_engine::tokenizer::tokenize;
///
/// let raw = tokenize(["copy", "a.txt", "-force", "-mode", "fast"]);
/// assert_eq!(raw.command_name, "copy");
/// let pairs: Vec<_> = raw.parameters.iter().collect();
/// assert_eq!(pairs, vec![("1", "a.txt"), ("force", ""), ("mode", "fast")]);
///
/// assert!(tokenize(["copy", "--help"]).is_help_request);
/// ```
pub fn tokenize<I, S>(input: I) -> RawParse
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = input.into_iter();

    let Some(first) = tokens.next() else {
        return RawParse::failed("", ParseError::EmptyInput);
    };
    let command_name = first.as_ref().to_string();
    if command_name.trim().is_empty() {
        return RawParse::failed(command_name, ParseError::EmptyInput);
    }
    if fold_case(&command_name) == HELP_COMMAND {
        return RawParse::help(HELP_COMMAND);
    }

    let rest: Vec<S> = tokens.collect();
    let help_shorthand = rest
        .first()
        .is_some_and(|t| fold_case(t.as_ref().trim_start_matches('-')) == HELP_COMMAND);
    if help_shorthand {
        return RawParse::help(command_name);
    }

    let mut parameters = ParameterMap::new();
    let mut pending: Option<String> = None;

    for token in &rest {
        let token = token.as_ref();

        if let Some(name) = pending.take() {
            if !token.starts_with('-') {
                parameters.insert(name, token);
                continue;
            }
            parameters.insert(name, "");
        }

        if token.starts_with('-') {
            let name = token.trim_start_matches('-');
            if name.trim().is_empty() {
                return RawParse::failed(
                    command_name,
                    ParseError::MalformedParameterName(token.to_string()),
                );
            }
            pending = Some(name.to_string());
        } else {
            let position = parameters.len() + 1;
            parameters.insert(position.to_string(), token);
        }
    }

    if let Some(name) = pending {
        parameters.insert(name, "");
    }

    debug!(command = %command_name, parameters = parameters.len(), "Tokenized invocation");

    RawParse {
        command_name,
        parameters,
        is_help_request: false,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &RawParse) -> Vec<(&str, &str)> {
        raw.parameters.iter().collect()
    }

    #[test]
    fn test_command_only() {
        let raw = tokenize(["cmd"]);
        assert_eq!(raw.command_name, "cmd");
        assert!(raw.parameters.is_empty());
        assert!(raw.is_ok());
        assert!(!raw.is_help_request);
    }

    #[test]
    fn test_named_parameter() {
        let raw = tokenize(["cmd", "-x", "5"]);
        assert_eq!(pairs(&raw), vec![("x", "5")]);
    }

    #[test]
    fn test_flag_followed_by_named_parameter() {
        let raw = tokenize(["cmd", "-flag", "-y", "3"]);
        assert_eq!(pairs(&raw), vec![("flag", ""), ("y", "3")]);
    }

    #[test]
    fn test_trailing_flag_is_recorded_empty() {
        let raw = tokenize(["cmd", "-y", "3", "-verbose"]);
        assert_eq!(pairs(&raw), vec![("y", "3"), ("verbose", "")]);
    }

    #[test]
    fn test_positional_values() {
        let raw = tokenize(["cmd", "val1", "val2"]);
        assert_eq!(pairs(&raw), vec![("1", "val1"), ("2", "val2")]);
    }

    #[test]
    fn test_positional_index_counts_named_parameters() {
        let raw = tokenize(["cmd", "-x", "5", "val"]);
        assert_eq!(pairs(&raw), vec![("x", "5"), ("2", "val")]);
    }

    #[test]
    fn test_double_dash_equals_single_dash() {
        assert_eq!(tokenize(["cmd", "--name", "a"]), tokenize(["cmd", "-name", "a"]));
        let raw = tokenize(["cmd", "--dry-run"]);
        assert_eq!(pairs(&raw), vec![("dry-run", "")]);
    }

    #[test]
    fn test_registry_help_request() {
        let raw = tokenize(["HELP", "greet"]);
        assert_eq!(raw.command_name, "help");
        assert!(raw.is_help_request);
        assert!(raw.parameters.is_empty());
    }

    #[test]
    fn test_command_help_shorthand() {
        for marker in ["-help", "--help", "-HELP", "help"] {
            let raw = tokenize(["greet", marker, "-name", "x"]);
            assert_eq!(raw.command_name, "greet");
            assert!(raw.is_help_request, "marker {marker}");
            assert!(raw.parameters.is_empty());
        }
    }

    #[test]
    fn test_help_only_recognized_in_second_position() {
        let raw = tokenize(["greet", "Alice", "-help"]);
        assert!(!raw.is_help_request);
        assert_eq!(pairs(&raw), vec![("1", "Alice"), ("help", "")]);
    }

    #[test]
    fn test_malformed_parameter_name() {
        for bad in ["-", "--", "---"] {
            let raw = tokenize(["cmd", "a", bad, "b"]);
            assert_eq!(
                raw.error,
                Some(ParseError::MalformedParameterName(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(tokenize(empty).error, Some(ParseError::EmptyInput));
        assert_eq!(tokenize([" "]).error, Some(ParseError::EmptyInput));
        assert_eq!(tokenize_line("   ").error, Some(ParseError::EmptyInput));
    }

    #[test]
    fn test_tokenize_line_matches_argv() {
        assert_eq!(
            tokenize_line("greet -name  Alice"),
            tokenize(["greet", "-name", "Alice"])
        );
    }
}
