use serde::Serialize;

use crate::engine::config::*;

pub mod format;

/*
Columns are indexed left to right, rows bottom to top. A chip dropped
into a column lands on top of that column's stack:

6  . . . . . . .
5  . . . . . . .
   ...
1  . O . . . . .
0  X X O . . . .
   0 1 2 3 4 5 6
*/

// cells scanned on each side of the last chip when looking for a run
const REACH: i8 = RUN_LENGTH as i8 - 1;

// (col step, row step): vertical, horizontal, and both diagonals
static DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human = 1,
    Opponent = 2,
}

impl Player {
    pub fn other(&self) -> Player {
        match self {
            Self::Human => Self::Opponent,
            Self::Opponent => Self::Human,
        }
    }

    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Self::Human),
            2 => Some(Self::Opponent),
            _ => None,
        }
    }

    // score a board takes when this player completes a run
    #[inline(always)]
    pub fn win_score(&self) -> Score {
        match self {
            Self::Human => HUMAN_WIN,
            Self::Opponent => OPPONENT_WIN,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub col: u8,
    pub row: u8,
}

impl Coord {
    pub fn new(col: usize, row: usize) -> Coord {
        debug_assert!(col < COLS && row < ROWS);
        Coord {
            col: col as u8,
            row: row as u8,
        }
    }
}

/// The line of chips that won the game, last-found chip first.
pub type WinningChips = [Coord; RUN_LENGTH];

/// Set of columns, one bit per column. Iterates in increasing order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Columns {
    occupancy: u8,
}

impl Columns {
    fn new() -> Columns {
        Columns { occupancy: 0 }
    }

    fn add(&mut self, col: usize) {
        self.occupancy |= 1 << col;
    }

    pub fn size(&self) -> u32 {
        self.occupancy.count_ones()
    }

    pub fn contains(&self, col: usize) -> bool {
        col < COLS && self.occupancy & (1 << col) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy == 0
    }
}

impl Iterator for Columns {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.occupancy == 0 {
            return None;
        }
        let col = self.occupancy.trailing_zeros() as usize;
        self.occupancy &= !(1 << col);
        Some(col)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct Column {
    cells: [Option<Player>; ROWS],
    height: u8,
}

impl Column {
    fn new() -> Column {
        Column {
            cells: [None; ROWS],
            height: 0,
        }
    }

    #[inline(always)]
    fn is_full(&self) -> bool {
        self.height as usize == ROWS
    }
}

/*
The whole board is a plain value (~60 bytes), so a search branch is a
copy and never aliases its parent or siblings.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    columns: [Column; COLS],
    score: Score,
    winning_chips: Option<WinningChips>,
}

impl Board {
    pub fn new() -> Board {
        Board {
            columns: [Column::new(); COLS],
            score: NO_WIN,
            winning_chips: None,
        }
    }

    /// A copy for exploring hypothetical futures. Keeps the chips and the
    /// score but drops the winning line annotation.
    pub fn branch(&self) -> Board {
        Board {
            columns: self.columns,
            score: self.score,
            winning_chips: None,
        }
    }

    /// Drops `player`'s chip into `col` and rescores the board around it.
    /// Returns where the chip landed, or `None` (board untouched) if the
    /// column is full or doesn't exist.
    pub fn place(&mut self, player: Player, col: usize) -> Option<Coord> {
        if col >= COLS || self.columns[col].is_full() {
            return None;
        }

        let column = &mut self.columns[col];
        let row = column.height as usize;
        column.cells[row] = Some(player);
        column.height += 1;

        let at = Coord::new(col, row);
        self.update_score(player, at);
        Some(at)
    }

    fn update_score(&mut self, player: Player, at: Coord) {
        self.winning_chips = DIRECTIONS
            .iter()
            .find_map(|&(col_step, row_step)| self.find_run(player, at, col_step, row_step));

        self.score = match self.winning_chips {
            Some(_) => player.win_score(),
            None => NO_WIN,
        };
    }

    // walk the 7-cell window centered on `at` along one direction
    fn find_run(&self, player: Player, at: Coord, col_step: i8, row_step: i8) -> Option<WinningChips> {
        let mut count = 0;
        for step in -REACH..=REACH {
            let col = at.col as i8 + step * col_step;
            let row = at.row as i8 + step * row_step;
            if self.player_at(col, row) == Some(player) {
                count += 1;
                if count == RUN_LENGTH {
                    let mut chips = [at; RUN_LENGTH];
                    for (i, chip) in chips.iter_mut().enumerate() {
                        let back = step - i as i8;
                        chip.col = (at.col as i8 + back * col_step) as u8;
                        chip.row = (at.row as i8 + back * row_step) as u8;
                    }
                    return Some(chips);
                }
            } else {
                count = 0;
                // can't happen: the center is the chip just placed
                if step == 0 {
                    break;
                }
            }
        }
        None
    }

    // off-board and empty cells both read as None
    #[inline(always)]
    fn player_at(&self, col: i8, row: i8) -> Option<Player> {
        if col < 0 || row < 0 || col as usize >= COLS || row as usize >= ROWS {
            return None;
        }
        self.columns[col as usize].cells[row as usize]
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Player> {
        if col >= COLS || row >= ROWS {
            return None;
        }
        self.columns[col].cells[row]
    }

    // None for columns off the board, like `get` and `place`
    pub fn height(&self, col: usize) -> Option<usize> {
        self.columns.get(col).map(|c| c.height as usize)
    }

    pub fn chip_count(&self) -> usize {
        self.columns.iter().map(|c| c.height as usize).sum()
    }

    #[inline(always)]
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winning_chips(&self) -> Option<&WinningChips> {
        self.winning_chips.as_ref()
    }

    pub fn is_full(&self) -> bool {
        self.columns.iter().all(|c| c.is_full())
    }

    #[inline(always)]
    pub fn has_winner(&self) -> bool {
        self.score == HUMAN_WIN || self.score == OPPONENT_WIN
    }

    pub fn is_over(&self) -> bool {
        self.has_winner() || self.is_full()
    }

    // columns that can still take a chip; does NOT check if the game is won
    pub fn legal_columns(&self) -> Columns {
        let mut cols = Columns::new();
        for (i, column) in self.columns.iter().enumerate() {
            if !column.is_full() {
                cols.add(i);
            }
        }
        cols
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

// number of leaf positions `depth` plies below `board`, counting the moves
// available at the last ply. Won positions have no moves.
pub fn perft(depth: u16, board: &Board, to_move: Player) -> u64 {
    if board.has_winner() {
        return 0;
    }
    if depth == 0 {
        return board.legal_columns().size() as u64;
    }

    let mut count: u64 = 0;
    for col in board.legal_columns() {
        let mut child = board.branch();
        child.place(to_move, col);
        count += perft(depth - 1, &child, to_move.other());
    }
    count
}
