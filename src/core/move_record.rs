use crate::core::player::PlayerId;
use std::fmt;

/// One accepted move. Only the engine builds these, so `after` is always `before - taken`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[readonly::make]
pub struct MoveRecord {
    pub player_id: PlayerId,
    pub taken: u32,
    pub before: u32,
    pub after: u32,
}

impl MoveRecord {
    pub(crate) fn new(player_id: PlayerId, taken: u32, before: u32) -> Self {
        Self {
            player_id,
            taken,
            before,
            after: before - taken,
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} took {} ({} -> {})",
            self.player_id, self.taken, self.before, self.after
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_is_derived_from_before_and_taken() {
        let record = MoveRecord::new(PlayerId::SECOND, 3, 7);
        assert_eq!(record.after, 4);
        assert_eq!(MoveRecord::new(PlayerId::FIRST, 2, 2).after, 0);
    }

    #[test]
    fn display_reads_like_a_turn_log() {
        let record = MoveRecord::new(PlayerId::FIRST, 2, 21);
        assert_eq!(record.to_string(), "P1 took 2 (21 -> 19)");
    }

}
