/* For importing/exporting boards as text */

use std::fmt;

use crate::board::*;
use crate::error::Error;

impl Board {
    // comma separated list of columns, human moves first and players alternate
    pub fn from_move_list(repr: &str) -> Result<Board, Error> {
        let mut board = Board::new();
        let mut player = Player::Human;
        for tok in repr.split(',') {
            let tok = tok.trim();
            if tok.is_empty() {
                continue;
            }
            let col = parse_column(tok)?;
            board.place(player, col).ok_or(Error::ColumnFull { column: col })?;
            player = player.other();
        }
        Ok(board)
    }

    /*
    One string per column, bottom chip first, chips given by player id:

        Board::from_columns(&["12", "", "2", "", "", "", "1"])

    Chips are placed column by column, so the score only reflects the
    very last chip.
    */
    pub fn from_columns(repr: &[&str]) -> Result<Board, Error> {
        if repr.len() > COLS {
            return Err(Error::ColumnOutOfRange { column: repr.len() - 1 });
        }
        let mut board = Board::new();
        for (col, chips) in repr.iter().enumerate() {
            for c in chips.chars() {
                let player = c
                    .to_digit(10)
                    .and_then(|id| Player::from_id(id as u8))
                    .ok_or_else(|| Error::ParseMove { token: c.to_string() })?;
                board.place(player, col).ok_or(Error::ColumnFull { column: col })?;
            }
        }
        Ok(board)
    }

    /*
    Top row first. X is the human, O the opponent; chips of the winning
    line are lowercase.

     . . . . . . .
     ...
     X O x x x x O
     0 1 2 3 4 5 6
    */
    pub fn to_pretty_board(&self) -> String {
        let mut out = String::new();
        for row in (0..ROWS).rev() {
            let line = (0..COLS)
                .map(|col| self.chip_char(col, row).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }
        let footer = (0..COLS).map(|col| col.to_string()).collect::<Vec<_>>().join(" ");
        out.push_str(&footer);
        out.push('\n');
        out
    }

    fn chip_char(&self, col: usize, row: usize) -> char {
        let c = match self.get(col, row) {
            Some(Player::Human) => 'X',
            Some(Player::Opponent) => 'O',
            None => return '.',
        };
        let winning = self
            .winning_chips()
            .map_or(false, |chips| chips.contains(&Coord::new(col, row)));
        if winning {
            c.to_ascii_lowercase()
        } else {
            c
        }
    }
}

// column index as typed by a user or found in a move list
pub fn parse_column(tok: &str) -> Result<usize, Error> {
    let col: usize = tok.parse().map_err(|_| Error::ParseMove {
        token: tok.to_string(),
    })?;
    if col >= COLS {
        return Err(Error::ColumnOutOfRange { column: col });
    }
    Ok(col)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_pretty_board())
    }
}
