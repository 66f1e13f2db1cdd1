//! A reference block pair with its known inverse transform.
//!
//! Used by the speed test and benchmarks, and as a fixed end-to-end check.

use crate::data::block::Block;

/// Transform-domain input.
pub const R: Block = Block::new([
    [17, 18, 191, 20],
    [21, 22, 231, 24],
    [251, 26, 27, 28],
    [29, 301, 31, 32],
]);

/// Prediction term.
pub const P: Block = Block::new([
    [1, 21, 34, 4],
    [5, 6, 71, 8],
    [91, 10, 11, 12],
    [13, 14, 15, 161],
]);

/// `inverse_transform(&R, &P)`.
pub const C: Block = Block::new([
    [50, 16, -34, 20],
    [0, -54, 0, 18],
    [-3, 16, -34, -16],
    [0, -18, 36, 18],
]);
