/* BOARD */

pub const COLS: usize = 7;
pub const ROWS: usize = 7;

// chips in a row needed to win
pub const RUN_LENGTH: usize = 4;

/* SCORES */

// outcome of the last move applied to a board; not a positional heuristic
pub type Score = i8;

pub const NO_WIN: Score = 0;
pub const HUMAN_WIN: Score = -4;
pub const OPPONENT_WIN: Score = 4;

/* SEARCH PARAMETERS */

pub const DEFAULT_MAX_DEPTH: u16 = 4;

// branching factor is 7, so every extra ply costs ~7x; don't go past this
pub const MAX_SEARCH_DEPTH: u16 = 8;

pub const MAX_DIFFICULTY: u8 = 5;

/// Difficulty as offered to players. Level `d` searches `d + 1` plies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Difficulty(u8);

impl Difficulty {
    pub fn new(level: u8) -> Option<Difficulty> {
        if level > MAX_DIFFICULTY {
            return None;
        }
        Some(Difficulty(level))
    }

    pub fn max_depth(&self) -> u16 {
        self.0 as u16 + 1
    }
}

impl Default for Difficulty {
    fn default() -> Difficulty {
        Difficulty((DEFAULT_MAX_DEPTH - 1) as u8)
    }
}
