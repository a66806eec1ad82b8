pub mod config;
pub mod search;
pub mod utils;

use rand::Rng;

use crate::board::*;
use crate::engine::config::*;
use crate::engine::search::*;

/// The opponent's pick for one turn, plus what the search learned about the
/// outcome along the way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Choice {
    pub column: Option<usize>,
    pub win_imminent: bool,
    pub loss_imminent: bool,
}

// iterative deepening over minimax, for the opponent to move on `live`.
// progress is only reported by the final (depth == max_depth) pass.
pub fn choose_move<R: Rng>(
    live: &Board,
    max_depth: u16,
    rng: &mut R,
    progress: &mut dyn FnMut(usize),
) -> Choice {
    let mut choice = Choice::default();

    for depth in 0..=max_depth {
        let branch = live.branch();
        let node = if depth == max_depth {
            minimax(&branch, Player::Opponent, depth, rng, progress)
        } else {
            minimax(&branch, Player::Opponent, depth, rng, &mut |_| {})
        };
        log::debug!("depth {}/score {}/column {:?}", depth, node.score, node.column);

        match node.score {
            HUMAN_WIN => {
                // keep the previous depth's column; nothing deeper can save us
                choice.loss_imminent = true;
                if depth == 0 {
                    choice.column = live.legal_columns().next();
                }
                log::info!("forced loss within {} plies, playing {:?}", depth + 1, choice.column);
                break;
            }
            OPPONENT_WIN => {
                choice.column = node.column;
                choice.win_imminent = true;
                log::info!("forced win within {} plies, playing {:?}", depth + 1, choice.column);
                break;
            }
            _ => choice.column = node.column,
        }
    }

    choice
}

/// Owns the random source used to break ties between equally good columns.
pub struct Searcher<R: Rng> {
    rng: R,
}

impl<R: Rng> Searcher<R> {
    pub fn new(rng: R) -> Searcher<R> {
        Searcher { rng }
    }

    pub fn choose_move(&mut self, live: &Board, max_depth: u16, progress: &mut dyn FnMut(usize)) -> Choice {
        choose_move(live, max_depth, &mut self.rng, progress)
    }
}
