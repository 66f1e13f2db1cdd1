//! Inverse 4x4 integer Walsh-Hadamard transform.
//!
//! Given transformed data `R` and a prediction term `P`, computes
//! `C = round(A * (R - P) * A / 16)` where `A` is the sequency-ordered
//! Hadamard matrix [`HADAMARD_4X4`]. The companion forward transform is
//! `R = A * C * A + P`.
//!
//! Both products with `A` are computed with the fast Walsh-Hadamard
//! butterfly, 8 additions per row or column. The division by 16 rounds
//! halves away from zero using integer arithmetic only.
//!
//! ```
//! use hadamard_inverse::{Block, forward_transform, inverse_transform};
//!
//! let c = Block::new([[3, 0, 0, 0], [0, -1, 0, 0], [0, 0, 0, 2], [0, 0, 0, 0]]);
//! let p = Block::new([[16, 16, 16, 16]; 4]);
//! let r = forward_transform(&c, &p);
//! assert_eq!(inverse_transform(&r, &p), c);
//! ```
//!
//! Inputs are assumed to be 8-bit samples held in `i16`. That keeps every
//! intermediate inside `i16`; the transforms themselves never check it.
//! Use [`Block::check_difference_range`] where inputs are untrusted.

mod data;
pub mod golden;
mod math;
mod transform;

pub use crate::{
    data::block::{BLOCK_LEN, BLOCK_SIZE, Block, BlockError, HADAMARD_4X4, MAX_DIFFERENCE},
    math::div_round16,
    transform::{forward_transform, inverse_transform},
};
