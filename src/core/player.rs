use crate::core::{error::ConfigError, error::ProviderError, rule_helper};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::num::IntErrorKind;

/// Seat index of one of the two players. Only 0 and 1 can be constructed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PlayerId(usize);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    pub fn from_index(index: usize) -> Result<Self, ConfigError> {
        if index < rule_helper::NUM_PLAYERS {
            Ok(PlayerId(index))
        } else {
            Err(ConfigError::InvalidStartingPlayer {
                starting_player: index,
            })
        }
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn display_num(self) -> usize {
        self.0 + 1
    }

    pub fn all() -> [PlayerId; rule_helper::NUM_PLAYERS] {
        [PlayerId::FIRST, PlayerId::SECOND]
    }
}

impl TryFrom<usize> for PlayerId {
    type Error = ConfigError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        PlayerId::from_index(index)
    }
}

impl From<PlayerId> for usize {
    fn from(player_id: PlayerId) -> Self {
        player_id.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.display_num())
    }
}

/// Source of candidate moves for one seat. The engine never calls this; only the driver does.
pub trait MoveProvider {
    fn next_move(&mut self) -> Result<i64, ProviderError>;
}

impl<F> MoveProvider for F
where
    F: FnMut() -> Result<i64, ProviderError>,
{
    fn next_move(&mut self) -> Result<i64, ProviderError> {
        self()
    }
}

/// Parses one line of user text the same way for every text-backed provider.
///
/// Integers too large for `i64` saturate, so the engine rejects them as out of range rather than
/// the player being told they are not numbers.
pub fn parse_move_text(raw: &str) -> Result<i64, ProviderError> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(take) => Ok(take),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ProviderError::Malformed(trimmed.to_string())),
        },
    }
}

/// Pre-recorded move text, consumed front to back.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMoves {
    pending: VecDeque<String>,
}

impl ScriptedMoves {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            pending: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl MoveProvider for ScriptedMoves {
    fn next_move(&mut self) -> Result<i64, ProviderError> {
        let line = self.pending.pop_front().ok_or(ProviderError::Exhausted)?;
        parse_move_text(&line)
    }
}

/// A display name paired with the provider that produces that player's moves.
#[readonly::make]
pub struct PlayerBinding {
    pub name: String,
    provider: Box<dyn MoveProvider>,
}

impl PlayerBinding {
    pub fn new(
        name: impl Into<String>,
        provider: impl MoveProvider + 'static,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyPlayerName);
        }

        Ok(Self {
            name,
            provider: Box::new(provider),
        })
    }

    /// Uses `name` when it has visible characters, otherwise the seat's placeholder name.
    pub fn named_or_default(
        name: &str,
        player_id: PlayerId,
        provider: impl MoveProvider + 'static,
    ) -> Self {
        let name = match name.trim() {
            "" => rule_helper::default_player_name(player_id),
            trimmed => trimmed,
        };

        Self {
            name: name.to_string(),
            provider: Box::new(provider),
        }
    }

    pub fn next_move(&mut self) -> Result<i64, ProviderError> {
        self.provider.next_move()
    }
}

impl fmt::Debug for PlayerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerBinding")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
