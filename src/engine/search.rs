use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::*;
use crate::engine::config::*;

/// Result of a root search: the backed-up score and, only at the root, the
/// column picked among the children that achieve it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub score: Score,
    pub column: Option<usize>,
}

// plain minimax with no pruning and no evaluation past exact wins.
// `progress` sees every root column index before it is explored.
pub fn minimax<R: Rng>(
    root: &Board,
    player: Player,
    depth: u16,
    rng: &mut R,
    progress: &mut dyn FnMut(usize),
) -> SearchNode {
    let mut child_scores: [Option<Score>; COLS] = [None; COLS];
    let mut best: Option<Score> = None;

    let legal = root.legal_columns();
    for col in 0..COLS {
        progress(col);
        if !legal.contains(col) {
            continue;
        }
        let score = child_score(root, player, col, depth);
        child_scores[col] = Some(score);
        best = Some(back_up(player, best, score));
    }

    // no children: the node keeps the outcome of its own last move
    let score = best.unwrap_or_else(|| root.score());
    let tied = (0..COLS)
        .filter(|&col| child_scores[col] == Some(score))
        .collect::<Vec<_>>();

    SearchNode {
        score,
        column: pick_tied(&tied, rng),
    }
}

// backed-up score of `node` with `player` to move. Columns chosen below the
// root are never used, so only the score comes back.
pub fn backed_up_score(node: &Board, player: Player, depth: u16) -> Score {
    let mut best: Option<Score> = None;
    for col in node.legal_columns() {
        let score = child_score(node, player, col, depth);
        best = Some(back_up(player, best, score));
    }
    best.unwrap_or_else(|| node.score())
}

fn child_score(node: &Board, player: Player, col: usize, depth: u16) -> Score {
    let mut child = node.branch();
    child.place(player, col);
    if !child.has_winner() && depth > 0 {
        return backed_up_score(&child, player.other(), depth - 1);
    }
    child.score()
}

// the human minimizes, the opponent maximizes. first child always sets it
#[inline(always)]
fn back_up(player: Player, best: Option<Score>, score: Score) -> Score {
    match (player, best) {
        (_, None) => score,
        (Player::Human, Some(best)) => best.min(score),
        (Player::Opponent, Some(best)) => best.max(score),
    }
}

// uniform draw among equally scored root children
pub fn pick_tied<R: Rng>(tied: &[usize], rng: &mut R) -> Option<usize> {
    tied.choose(rng).copied()
}
