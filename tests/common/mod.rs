#![allow(dead_code)]

use cfour::board::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0x5eed)
}

// a full board with no four in a row anywhere: pairs of columns share a
// pattern alternating 1212121 / 2121212
pub fn drawn_columns() -> Vec<String> {
    (0..7)
        .map(|col| {
            (0..7)
                .map(|row| if (col / 2 + row) % 2 == 0 { '1' } else { '2' })
                .collect()
        })
        .collect()
}

pub fn sorted(chips: &WinningChips) -> Vec<(u8, u8)> {
    let mut v = chips.iter().map(|c| (c.col, c.row)).collect::<Vec<_>>();
    v.sort();
    v
}
