use crossterm::style::{Stylize, style};
use nim21::core::{
    error::{ConfigError, ProviderError},
    game_config::GameConfig,
    nim_game::NimGame,
    player::{MoveProvider, PlayerBinding, PlayerId, parse_move_text},
    turn_loop::{TurnEvent, run_to_completion},
};
use std::io::{self, Write};

/// Reads one whole-number move per line from stdin. The prompt is printed by the session.
struct ConsoleMoves;

impl MoveProvider for ConsoleMoves {
    fn next_move(&mut self) -> Result<i64, ProviderError> {
        match read_line()? {
            Some(line) => parse_move_text(&line),
            None => Err(ProviderError::InputClosed),
        }
    }
}

pub struct Session {
    game: NimGame,
    should_quit: bool,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            game: NimGame::from_config(&config)?,
            should_quit: false,
        })
    }

    pub fn start(&mut self) {
        println!("Welcome to 21 Nim!");

        let Some(mut players) = self.collect_players() else {
            return;
        };
        let names = players.each_ref().map(|binding| binding.name.clone());

        while !self.should_quit {
            let outcome = run_to_completion(&mut self.game, &mut players, |event| {
                if let Some(text) = event_text(event, &names) {
                    print_event(event, &text);
                }
            });

            match outcome {
                Ok(_) => self.offer_rematch(),
                Err(ProviderError::InputClosed) => {
                    println!();
                    self.should_quit = true;
                }
                Err(err) => {
                    println!("match stopped: {err}");
                    self.should_quit = true;
                }
            }
        }
    }

    fn collect_players(&self) -> Option<[PlayerBinding; 2]> {
        let mut players = Vec::with_capacity(2);
        for player_id in PlayerId::all() {
            let name = prompt_line(&format!("Enter Player {} name: ", player_id.display_num()))?;
            players.push(PlayerBinding::named_or_default(&name, player_id, ConsoleMoves));
        }
        players.try_into().ok()
    }

    fn offer_rematch(&mut self) {
        let answer = prompt_line("Play again? [y/N] ").unwrap_or_default();
        if !answer.trim().eq_ignore_ascii_case("y") {
            self.should_quit = true;
            return;
        }

        if let Err(err) = self.game.reset(None) {
            println!("problems resetting game: {err}");
            self.should_quit = true;
        }
    }
}

/// Console wording for one turn event, or `None` when the event prints nothing.
fn event_text(event: &TurnEvent, names: &[String; 2]) -> Option<String> {
    let name_of = |player_id: &PlayerId| names[player_id.index()].as_str();

    match event {
        TurnEvent::Awaiting {
            player_id,
            max_take,
            remaining,
        } => Some(format!(
            "{}, take 1-{max_take} ({remaining} left): ",
            name_of(player_id)
        )),
        TurnEvent::Moved { player_id, record } => Some(format!(
            "{} took {} ({} -> {} left)",
            name_of(player_id),
            record.taken,
            record.before,
            record.after
        )),
        TurnEvent::MalformedInput { .. } => {
            Some("Invalid input. Please enter a whole number.".to_string())
        }
        TurnEvent::Rejected { error, .. } => Some(format!("Invalid move: {error}")),
        TurnEvent::GameOver { winner } => {
            winner.map(|player_id| format!("\nGame over! Winner: {}", name_of(&player_id)))
        }
    }
}

fn print_event(event: &TurnEvent, text: &str) {
    match event {
        TurnEvent::Awaiting { .. } => {
            print!("{text}");
            let _ = io::stdout().flush();
        }
        TurnEvent::GameOver { .. } => println!("{}", style(text).bold()),
        _ => println!("{text}"),
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    match read_line() {
        Ok(line) => line,
        Err(err) => {
            log::warn!("failed to read stdin: {err}");
            None
        }
    }
}

/// One line from stdin without its line ending; `None` at end of input.
fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    match io::stdin().read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
    }
}
