//! Scramble-text loader frames.
//!
//! While a generation is pending the art panel shows a grid of churning
//! symbols. Every frame is built from scratch; nothing carries over between
//! frames, so the animation can be torn down at any tick.

use crate::SCRAMBLE_GLYPHS;
use crate::rng::RandomSource;

/// Rows per frame.
pub const FRAME_ROWS: usize = 15;
/// Columns per frame.
pub const FRAME_COLS: usize = 40;

/// Builds one full frame: `FRAME_ROWS` lines of `FRAME_COLS` glyphs, each
/// cell drawn uniformly from [`SCRAMBLE_GLYPHS`].
pub fn scramble_frame<R: RandomSource>(rng: &mut R) -> String {
    let glyphs = SCRAMBLE_GLYPHS.as_bytes();
    let mut out = String::with_capacity(FRAME_ROWS * (FRAME_COLS + 1));
    for row in 0..FRAME_ROWS {
        if row > 0 {
            out.push('\n');
        }
        for _ in 0..FRAME_COLS {
            out.push(glyphs[rng.next_index(glyphs.len())] as char);
        }
    }
    out
}
