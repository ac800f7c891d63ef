mod session;

use clap::Parser;
use nim21::core::{game_config::GameConfig, rule_helper};
use session::Session;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Two-player 21 Nim in the terminal", long_about = None)]
struct Args {
    /// Objects in the pile at the start of each game
    #[arg(long, default_value_t = rule_helper::DEFAULT_TOTAL_OBJECTS)]
    total_objects: u32,

    /// Most objects a player may take in one turn
    #[arg(long, default_value_t = rule_helper::DEFAULT_MAX_TAKE)]
    max_take: u32,

    /// Seat that moves first (0 or 1)
    #[arg(long, default_value_t = rule_helper::DEFAULT_STARTING_PLAYER.index())]
    starting_player: usize,

    /// Log engine activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig::new(self.total_objects, self.max_take, self.starting_player)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_time_level(LevelFilter::Off)
        .build();

    if let Err(err) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("logging disabled: {err}");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    log::debug!("{args:?}");

    let mut session = match Session::new(args.game_config()) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("invalid game settings: {err}");
            return ExitCode::FAILURE;
        }
    };

    session.start();
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_standard_match() {
        let args = Args::parse_from(["nim21_cli"]);
        assert_eq!(args.game_config(), GameConfig::default());
        assert!(!args.verbose);
    }

    #[test]
    fn flags_override_each_parameter() {
        let args = Args::parse_from([
            "nim21_cli",
            "--total-objects",
            "15",
            "--max-take",
            "4",
            "--starting-player",
            "1",
            "-v",
        ]);
        assert_eq!(args.game_config(), GameConfig::new(15, 4, 1));
        assert!(args.verbose);
    }
}
