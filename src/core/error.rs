use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    TotalObjectsTooSmall { total_objects: u32 },
    MaxTakeTooSmall { max_take: u32 },
    InvalidStartingPlayer { starting_player: usize },
    EmptyPlayerName,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TotalObjectsTooSmall { total_objects } => {
                write!(f, "total objects must be >= 1 (got {total_objects})")
            }
            ConfigError::MaxTakeTooSmall { max_take } => {
                write!(f, "max take must be >= 1 (got {max_take})")
            }
            ConfigError::InvalidStartingPlayer { starting_player } => {
                write!(f, "starting player must be 0 or 1 (got {starting_player})")
            }
            ConfigError::EmptyPlayerName => f.write_str("player name must be non-empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Reason a move was rejected. The engine state is untouched whenever one of these is returned.
#[derive(Clone, Debug, PartialEq)]
pub enum MoveError {
    NotWholeNumber,
    TooFew { take: i64 },
    TooMany { take: i64, max_take: u32 },
    ExceedsRemaining { take: i64, remaining: u32 },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NotWholeNumber => f.write_str("Move must be a whole number."),
            MoveError::TooFew { .. } => f.write_str("You must take at least 1 object."),
            MoveError::TooMany { max_take, .. } => {
                write!(f, "You cannot take more than {max_take} objects.")
            }
            MoveError::ExceedsRemaining { .. } => {
                f.write_str("You cannot take more objects than remain in the pile.")
            }
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug)]
pub enum ProviderError {
    /// Input that could not be read as a whole number; the turn may be retried.
    Malformed(String),
    InputClosed,
    Exhausted,
    Io(std::io::Error),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Malformed(raw) => write!(f, "'{raw}' is not a whole number"),
            ProviderError::InputClosed => f.write_str("input closed"),
            ProviderError::Exhausted => f.write_str("move provider has no more moves"),
            ProviderError::Io(err) => write!(f, "failed to read move: {err}"),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProviderError {
    fn from(err: std::io::Error) -> Self {
        ProviderError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_error_messages_name_the_limit() {
        let err = MoveError::TooMany { take: 4, max_take: 3 };
        assert_eq!(err.to_string(), "You cannot take more than 3 objects.");
        assert_eq!(
            MoveError::TooFew { take: 0 }.to_string(),
            "You must take at least 1 object."
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;

        let err = ProviderError::from(std::io::Error::other("broken pipe"));
        assert!(err.source().is_some());
        assert!(ProviderError::Exhausted.source().is_none());
    }
}
