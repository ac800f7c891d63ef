use wasm_bindgen::prelude::*;

pub mod core;

use crate::core::{game_config::GameConfig, nim_game::NimGame};

/// Browser-facing wrapper. Failures come back as message strings so the page can show them as-is.
#[wasm_bindgen]
pub struct NimGameHandle {
    game: NimGame,
}

#[wasm_bindgen]
impl NimGameHandle {
    pub fn summary(&self) -> String {
        self.game.to_string()
    }

    #[wasm_bindgen(js_name = "totalObjects")]
    pub fn total_objects(&self) -> u32 {
        self.game.total_objects
    }

    #[wasm_bindgen(js_name = "maxTake")]
    pub fn max_take(&self) -> u32 {
        self.game.max_take
    }

    pub fn remaining(&self) -> u32 {
        self.game.remaining
    }

    #[wasm_bindgen(js_name = "currentPlayer")]
    pub fn current_player(&self) -> u32 {
        self.game.current_player.index() as u32
    }

    #[wasm_bindgen(js_name = "legalMax")]
    pub fn legal_max(&self) -> u32 {
        *self.game.legal_range().end()
    }

    #[wasm_bindgen(js_name = "isOver")]
    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Winning seat, or -1 while the game is still running.
    pub fn winner(&self) -> i32 {
        self.game
            .winner()
            .map(|player_id| player_id.index() as i32)
            .unwrap_or(-1)
    }

    #[wasm_bindgen(js_name = "validateMove")]
    pub fn validate_move(&self, take: f64) -> String {
        match self.game.validate_move(take) {
            Ok(_) => String::new(),
            Err(err) => err.to_string(),
        }
    }

    #[wasm_bindgen(js_name = "applyMove")]
    pub fn apply_move(&mut self, take: f64) -> String {
        match self.game.apply_move(take) {
            Ok(_) => String::new(),
            Err(err) => err.to_string(),
        }
    }

    /// Negative `starting_player` keeps whoever is current.
    #[wasm_bindgen(js_name = "resetGame")]
    pub fn reset_game(&mut self, starting_player: i32) -> String {
        let starting_player = usize::try_from(starting_player).ok();
        match self.game.reset(starting_player) {
            Ok(()) => String::new(),
            Err(err) => err.to_string(),
        }
    }

    #[wasm_bindgen(js_name = "historyText")]
    pub fn history_text(&self) -> String {
        self.game.history_text()
    }
}

#[wasm_bindgen(js_name = "newNimGame")]
pub fn new_nim_game(
    total_objects: u32,
    max_take: u32,
    starting_player: u32,
) -> Result<NimGameHandle, JsValue> {
    let config = GameConfig::new(total_objects, max_take, starting_player as usize);
    let game = NimGame::from_config(&config).map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(NimGameHandle { game })
}

#[wasm_bindgen(js_name = "newDefaultNimGame")]
pub fn new_default_nim_game() -> NimGameHandle {
    NimGameHandle {
        game: NimGame::standard(),
    }
}
