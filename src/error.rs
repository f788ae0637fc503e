use crate::value::ValueKind;
use itertools::Itertools;

/// A variant of this enum is returned when the command line arguments don't match the switch
/// declarations, or when an assigned value can't be read as its declared type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("received no arguments")]
    InvalidParameters,
    #[error("unrecognized argument \"{switch}\"")]
    UnknownArgument { switch: String },
    #[error("invalid argument with character '{character}' in \"{token}\"")]
    InvalidArgumentCharacter { character: char, token: String },
    #[error("argument '{switch}' requires a {kind} value but received none")]
    MissingValue { switch: String, kind: ValueKind },
    #[error("could not convert value '{raw}' to {kind}")]
    ValueConversion { raw: String, kind: ValueKind },
    #[error("missing required arguments: {}", .0.iter().join(", "))]
    MissingRequiredArguments(Vec<String>),
}

/// Returned when a switch declaration is malformed or collides with an existing one.
///
/// These are mistakes in the program, not in the user's input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("a switch needs a long form, a short form, or both")]
    Nameless,
    #[error("long form '{0}' must not start with '-'")]
    LongFormStartsWithHyphen(String),
    #[error("short form '{0}' is not an ASCII letter")]
    InvalidShortForm(char),
    #[error("a switch with long form '{0}' is already declared")]
    DuplicateLongForm(String),
    #[error("a switch with short form '{0}' is already declared")]
    DuplicateShortForm(char),
}
