use crate::core::{
    error::{ConfigError, MoveError},
    game_config::GameConfig,
    move_record::MoveRecord,
    player::PlayerId,
    rule_helper,
};
use itertools::Itertools;
use num::ToPrimitive;
use std::fmt;
use std::ops::RangeInclusive;

/// Pile and turn state for one game of normal-play Nim: whoever takes the last object wins.
///
/// All mutation goes through [`NimGame::apply_move`] and [`NimGame::reset`]; fields are
/// readable but not writable from outside this module.
#[derive(Clone, Debug, PartialEq, Eq)]
#[readonly::make]
pub struct NimGame {
    pub total_objects: u32,
    pub max_take: u32,
    pub current_player: PlayerId,
    pub remaining: u32,
    pub history: Vec<MoveRecord>,
}

impl NimGame {
    pub fn new(total_objects: u32, max_take: u32, starting_player: usize) -> Result<Self, ConfigError> {
        Self::from_config(&GameConfig::new(total_objects, max_take, starting_player))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let starting_player = config.validate()?;
        Ok(Self {
            total_objects: config.total_objects,
            max_take: config.max_take,
            current_player: starting_player,
            remaining: config.total_objects,
            history: Vec::new(),
        })
    }

    pub fn standard() -> Self {
        Self {
            total_objects: rule_helper::DEFAULT_TOTAL_OBJECTS,
            max_take: rule_helper::DEFAULT_MAX_TAKE,
            current_player: rule_helper::DEFAULT_STARTING_PLAYER,
            remaining: rule_helper::DEFAULT_TOTAL_OBJECTS,
            history: Vec::new(),
        }
    }

    /// Inclusive range of legal takes; empty once the pile is gone.
    pub fn legal_range(&self) -> RangeInclusive<u32> {
        1..=self.max_take.min(self.remaining)
    }

    /// Checks a candidate without touching state. Causes are checked in a fixed order:
    /// not a whole number, fewer than one, more than `max_take`, more than `remaining`.
    pub fn validate_move<T: ToPrimitive>(&self, take: T) -> Result<u32, MoveError> {
        let take = whole_take(take)?;

        if take < 1 {
            return Err(MoveError::TooFew { take });
        }
        if take > i64::from(self.max_take) {
            return Err(MoveError::TooMany {
                take,
                max_take: self.max_take,
            });
        }
        if take > i64::from(self.remaining) {
            return Err(MoveError::ExceedsRemaining {
                take,
                remaining: self.remaining,
            });
        }

        Ok(take as u32)
    }

    pub fn apply_move<T: ToPrimitive>(&mut self, take: T) -> Result<MoveRecord, MoveError> {
        let take = self.validate_move(take)?;

        let record = MoveRecord::new(self.current_player, take, self.remaining);
        self.remaining = record.after;
        self.history.push(record);
        log::debug!("{record}");

        // The last taker stays current so the winner reads the same from either field.
        if self.remaining > 0 {
            self.current_player = rule_helper::opponent(self.current_player);
        } else {
            log::info!("{} took the last object", record.player_id);
        }

        Ok(record)
    }

    pub fn is_over(&self) -> bool {
        self.remaining == 0
    }

    /// Seat that took the final object, read from history. `None` while the game is running.
    pub fn winner(&self) -> Option<PlayerId> {
        if !self.is_over() {
            return None;
        }
        self.history.last().map(|record| record.player_id)
    }

    pub fn reset(&mut self, starting_player: Option<usize>) -> Result<(), ConfigError> {
        let starting_player = starting_player.map(PlayerId::from_index).transpose()?;

        if let Some(player_id) = starting_player {
            self.current_player = player_id;
        }
        self.remaining = self.total_objects;
        self.history.clear();
        log::info!(
            "reset to {} objects, {} to move",
            self.total_objects,
            self.current_player
        );

        Ok(())
    }

    pub fn history_text(&self) -> String {
        self.history.iter().map(MoveRecord::to_string).join("\n")
    }
}

impl Default for NimGame {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for NimGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(winner) => write!(f, "{} left, {} won", self.remaining, winner),
            None => write!(f, "{} left, {} to move", self.remaining, self.current_player),
        }
    }
}

fn whole_take<T: ToPrimitive>(take: T) -> Result<i64, MoveError> {
    let as_float = take.to_f64().ok_or(MoveError::NotWholeNumber)?;
    if !as_float.is_finite() || as_float.fract() != 0.0 {
        return Err(MoveError::NotWholeNumber);
    }

    // Whole values outside i64 still need to report the right cause.
    Ok(take
        .to_i64()
        .unwrap_or(if as_float < 0.0 { i64::MIN } else { i64::MAX }))
}
