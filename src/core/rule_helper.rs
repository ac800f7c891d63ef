use crate::core::player::PlayerId;

pub const NUM_PLAYERS: usize = 2;

pub const DEFAULT_TOTAL_OBJECTS: u32 = 21;
pub const DEFAULT_MAX_TAKE: u32 = 3;
pub const DEFAULT_STARTING_PLAYER: PlayerId = PlayerId::FIRST;

pub const DEFAULT_PLAYER_NAMES: [&str; NUM_PLAYERS] = ["Player 1", "Player 2"];

pub fn opponent(player_id: PlayerId) -> PlayerId {
    if player_id == PlayerId::FIRST {
        PlayerId::SECOND
    } else {
        PlayerId::FIRST
    }
}

pub fn default_player_name(player_id: PlayerId) -> &'static str {
    DEFAULT_PLAYER_NAMES[player_id.index()]
}
