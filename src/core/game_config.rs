use crate::core::{error::ConfigError, player::PlayerId, rule_helper};
use serde::{Deserialize, Serialize};

/// Creation parameters for one game. `Default` is the standard 21 / 3 / first-player match.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub total_objects: u32,
    pub max_take: u32,
    pub starting_player: usize,
}

impl GameConfig {
    pub fn new(total_objects: u32, max_take: u32, starting_player: usize) -> Self {
        Self {
            total_objects,
            max_take,
            starting_player,
        }
    }

    /// Checks pile size, then max take, then starting player; the first failure wins.
    pub fn validate(&self) -> Result<PlayerId, ConfigError> {
        if self.total_objects < 1 {
            return Err(ConfigError::TotalObjectsTooSmall {
                total_objects: self.total_objects,
            });
        }
        if self.max_take < 1 {
            return Err(ConfigError::MaxTakeTooSmall {
                max_take: self.max_take,
            });
        }
        PlayerId::from_index(self.starting_player)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            rule_helper::DEFAULT_TOTAL_OBJECTS,
            rule_helper::DEFAULT_MAX_TAKE,
            rule_helper::DEFAULT_STARTING_PLAYER.index(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_match() {
        let config = GameConfig::default();
        assert_eq!(config, GameConfig::new(21, 3, 0));
        assert_eq!(config.validate(), Ok(PlayerId::FIRST));
    }

    #[test]
    fn validate_reports_first_problem() {
        assert_eq!(
            GameConfig::new(0, 0, 5).validate(),
            Err(ConfigError::TotalObjectsTooSmall { total_objects: 0 })
        );
        assert_eq!(
            GameConfig::new(10, 0, 5).validate(),
            Err(ConfigError::MaxTakeTooSmall { max_take: 0 })
        );
        assert_eq!(
            GameConfig::new(10, 2, 5).validate(),
            Err(ConfigError::InvalidStartingPlayer { starting_player: 5 })
        );
    }

    #[test]
    fn missing_json_fields_fall_back_to_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"maxTake": 4}"#).unwrap();
        assert_eq!(config, GameConfig::new(21, 4, 0));
    }
}
