
use crate::{
    data::{
        block::{BLOCK_LEN, Block},
        hadamard::hadamard4x4,
    },
    math::div_round16,
};

/// Computes the inverse transform `C = round(A * (R - P) * A / 16)`.
///
/// `A` is [`HADAMARD_4X4`](crate::HADAMARD_4X4). Both products with `A` are
/// done with butterflies, and the division rounds halves away from zero.
///
/// Inputs are expected to be 8-bit samples held in `i16`. Every
/// intermediate then stays within `i16`; nothing is checked at run time.
///
/// # Panics
///
/// - In builds with overflow checks enabled, if an intermediate value does
///   not fit in `i16`. Release builds wrap instead.
#[inline]
#[must_use]
pub fn inverse_transform(r: &Block, p: &Block) -> Block {
    let (r, p) = (r.as_flat(), p.as_flat());
    let mut out: [i16; BLOCK_LEN] = std::array::from_fn(|i| r[i] - p[i]);

    hadamard4x4(&mut out);

    for v in &mut out {
        *v = div_round16(*v);
    }
    Block::from_flat(out)
}

/// Computes the forward transform `R = A * C * A + P`.
///
/// The inverse of [`inverse_transform`] whenever the result fits in `i16`.
///
/// # Panics
///
/// - In builds with overflow checks enabled, if an intermediate value does
///   not fit in `i16`. Release builds wrap instead.
#[inline]
#[must_use]
pub fn forward_transform(c: &Block, p: &Block) -> Block {
    let mut out = *c;
    let data = out.as_flat_mut();

    hadamard4x4(data);

    for (v, &bias) in data.iter_mut().zip(p.as_flat()) {
        *v += bias;
    }
    out
}
