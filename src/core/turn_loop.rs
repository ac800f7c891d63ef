use crate::core::{
    error::{MoveError, ProviderError},
    move_record::MoveRecord,
    nim_game::NimGame,
    player::{PlayerBinding, PlayerId},
};

#[derive(Clone, Debug, PartialEq)]
pub enum TurnEvent {
    Awaiting { player_id: PlayerId, max_take: u32, remaining: u32 },
    Moved { player_id: PlayerId, record: MoveRecord },
    MalformedInput { player_id: PlayerId, raw: String },
    Rejected { player_id: PlayerId, error: MoveError },
    GameOver { winner: Option<PlayerId> },
}

/// Drives `game` until the pile is empty, asking the current seat's binding for each move.
/// `Awaiting` is reported right before each request so a front end can prompt for it.
///
/// Malformed input and rejected moves are reported and the same seat is asked again. Any other
/// provider failure ends the loop with the game left as it was after the last accepted move.
pub fn run_to_completion(
    game: &mut NimGame,
    players: &mut [PlayerBinding; 2],
    mut report: impl FnMut(&TurnEvent),
) -> Result<Option<PlayerId>, ProviderError> {
    while !game.is_over() {
        let player_id = game.current_player;
        report(&TurnEvent::Awaiting {
            player_id,
            max_take: game.max_take,
            remaining: game.remaining,
        });

        let binding = &mut players[player_id.index()];

        let event = match binding.next_move() {
            Ok(take) => match game.apply_move(take) {
                Ok(record) => TurnEvent::Moved { player_id, record },
                Err(error) => {
                    log::debug!("{} rejected: {error}", binding.name);
                    TurnEvent::Rejected { player_id, error }
                }
            },
            Err(ProviderError::Malformed(raw)) => {
                log::debug!("{} sent malformed input '{raw}'", binding.name);
                TurnEvent::MalformedInput { player_id, raw }
            }
            Err(err) => {
                log::info!("stopping match, {} cannot move: {err}", binding.name);
                return Err(err);
            }
        };

        report(&event);
    }

    let winner = game.winner();
    report(&TurnEvent::GameOver { winner });
    Ok(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::ScriptedMoves;

    fn scripted_players(first: &[&str], second: &[&str]) -> [PlayerBinding; 2] {
        [
            PlayerBinding::new("Ada", ScriptedMoves::new(first.iter().copied())).unwrap(),
            PlayerBinding::new("Bo", ScriptedMoves::new(second.iter().copied())).unwrap(),
        ]
    }

    #[test]
    fn plays_standard_match_to_the_end() {
        let mut game = NimGame::standard();
        // First player takes 1, then answers every move so the pair sums to 4.
        let mut players = scripted_players(
            &["1", "1", "2", "3", "1", "2"],
            &["3", "2", "1", "3", "2"],
        );

        let mut moves = Vec::new();
        let winner = run_to_completion(&mut game, &mut players, |event| {
            if let TurnEvent::Moved { record, .. } = event {
                moves.push(record.taken);
            }
        })
        .unwrap();

        assert_eq!(moves.iter().sum::<u32>(), 21);
        assert_eq!(winner, Some(PlayerId::FIRST));
        assert_eq!(game.winner(), winner);
    }

    #[test]
    fn bad_input_retries_the_same_player() {
        let mut game = NimGame::new(3, 3, 0).unwrap();
        let mut players = scripted_players(&["abc", "4", "2"], &["1"]);

        let mut events = Vec::new();
        let winner = run_to_completion(&mut game, &mut players, |event| {
            if !matches!(event, TurnEvent::Awaiting { .. }) {
                events.push(event.clone());
            }
        })
        .unwrap();

        assert_eq!(winner, Some(PlayerId::SECOND));
        assert_eq!(
            events[0],
            TurnEvent::MalformedInput {
                player_id: PlayerId::FIRST,
                raw: "abc".to_string()
            }
        );
        assert_eq!(
            events[1],
            TurnEvent::Rejected {
                player_id: PlayerId::FIRST,
                error: MoveError::TooMany { take: 4, max_take: 3 }
            }
        );
        assert!(matches!(
            events[2],
            TurnEvent::Moved { player_id: PlayerId::FIRST, record } if record.taken == 2
        ));
        assert!(matches!(
            events[3],
            TurnEvent::Moved { player_id: PlayerId::SECOND, record } if record.after == 0
        ));
        assert_eq!(
            events[4],
            TurnEvent::GameOver {
                winner: Some(PlayerId::SECOND)
            }
        );
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn awaiting_precedes_every_request() {
        let mut game = NimGame::new(5, 3, 0).unwrap();
        let mut players = scripted_players(&["x", "2"], &["3"]);

        let mut awaiting = Vec::new();
        run_to_completion(&mut game, &mut players, |event| {
            if let TurnEvent::Awaiting { player_id, max_take, remaining } = event {
                awaiting.push((*player_id, *max_take, *remaining));
            }
        })
        .unwrap();

        assert_eq!(
            awaiting,
            vec![
                (PlayerId::FIRST, 3, 5),
                (PlayerId::FIRST, 3, 5),
                (PlayerId::SECOND, 3, 3),
            ]
        );
    }

    #[test]
    fn exhausted_provider_stops_the_match() {
        let mut game = NimGame::standard();
        let mut players = scripted_players(&["3"], &[]);

        let result = run_to_completion(&mut game, &mut players, |_| {});

        assert!(matches!(result, Err(ProviderError::Exhausted)));
        assert_eq!(game.remaining, 18);
        assert_eq!(game.current_player, PlayerId::SECOND);
    }

    #[test]
    fn finished_game_reports_only_the_winner() {
        let mut game = NimGame::new(2, 3, 1).unwrap();
        game.apply_move(2).unwrap();
        let mut players = scripted_players(&[], &[]);

        let mut events = Vec::new();
        let winner = run_to_completion(&mut game, &mut players, |event| events.push(event.clone()))
            .unwrap();

        assert_eq!(winner, Some(PlayerId::SECOND));
        assert_eq!(events, vec![TurnEvent::GameOver { winner }]);
    }
}
