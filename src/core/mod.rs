pub mod error;
pub mod game_config;
pub mod move_record;
pub mod nim_game;
pub mod player;
pub mod rule_helper;
pub mod turn_loop;
