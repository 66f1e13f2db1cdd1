use std::fmt::{self, Display};

use thiserror::Error;

/// Width and height of a transform block.
pub const BLOCK_SIZE: usize = 4;
/// Number of coefficients in a transform block.
pub const BLOCK_LEN: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Largest value an 8-bit source sample can take.
const MAX_SAMPLE: i16 = u8::MAX as i16;

/// Largest `|R - P|` for which every intermediate of
/// [`inverse_transform`](crate::inverse_transform) fits in `i16`.
///
/// The two butterfly passes scale a difference by at most 16, and
/// `16 * 2047 = 32752`.
pub const MAX_DIFFERENCE: i32 = i16::MAX as i32 / 16;

/// The sequency-ordered 4x4 Walsh-Hadamard matrix `A`.
///
/// The butterflies behind [`inverse_transform`](crate::inverse_transform)
/// are wired for exactly this row order. It is symmetric and satisfies
/// `A * A = 4 * I`.
pub const HADAMARD_4X4: Block = Block::new([
    [1, 1, 1, 1],
    [1, 1, -1, -1],
    [1, -1, -1, 1],
    [1, -1, 1, -1],
]);

/// A 4x4 block of signed 16-bit values, stored in row-major order.
///
/// The same type carries transform-domain data, the prediction term and
/// the reconstructed coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[[i16; 4]; 4]", into = "[[i16; 4]; 4]")
)]
pub struct Block {
    data: [i16; BLOCK_LEN],
}

impl Block {
    /// Builds a block from its rows.
    #[inline]
    #[must_use]
    pub const fn new(rows: [[i16; BLOCK_SIZE]; BLOCK_SIZE]) -> Self {
        let mut data = [0; BLOCK_LEN];
        let mut i = 0;
        while i < BLOCK_LEN {
            data[i] = rows[i / BLOCK_SIZE][i % BLOCK_SIZE];
            i += 1;
        }
        Block { data }
    }

    /// Builds a block from 16 values in row-major order.
    #[inline]
    #[must_use]
    pub const fn from_flat(data: [i16; BLOCK_LEN]) -> Self {
        Block { data }
    }

    /// Returns the block as an array of rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> [[i16; BLOCK_SIZE]; BLOCK_SIZE] {
        std::array::from_fn(|row| self.row(row))
    }

    /// Returns a single row.
    ///
    /// # Panics
    ///
    /// - If `row` is not below [`BLOCK_SIZE`].
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> [i16; BLOCK_SIZE] {
        std::array::from_fn(|col| self.data[row * BLOCK_SIZE + col])
    }

    /// Returns the value at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// - If either index is not below [`BLOCK_SIZE`].
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i16 {
        assert!(col < BLOCK_SIZE);
        self.data[row * BLOCK_SIZE + col]
    }

    /// The underlying row-major storage.
    #[inline]
    #[must_use]
    pub const fn as_flat(&self) -> &[i16; BLOCK_LEN] {
        &self.data
    }

    pub(crate) fn as_flat_mut(&mut self) -> &mut [i16; BLOCK_LEN] {
        &mut self.data
    }

    /// Checks that every value lies in the 8-bit sample range `0..=255`.
    ///
    /// This is stricter than the transforms need. Use
    /// [`Block::check_difference_range`] for the exact inverse transform
    /// precondition.
    ///
    /// # Errors
    ///
    /// - Returns `SampleOutOfRange` for the first value, in row-major
    ///   order, that is negative or above 255.
    #[inline]
    pub fn check_sample_range(&self) -> Result<(), BlockError> {
        match self
            .data
            .iter()
            .position(|&value| !(0..=MAX_SAMPLE).contains(&value))
        {
            Some(i) => Err(BlockError::SampleOutOfRange {
                row: i / BLOCK_SIZE,
                col: i % BLOCK_SIZE,
                value: self.data[i],
            }),
            None => Ok(()),
        }
    }

    /// Checks that `r - p` can go through
    /// [`inverse_transform`](crate::inverse_transform) without any
    /// intermediate leaving the `i16` range, i.e. `|R - P| <=`
    /// [`MAX_DIFFERENCE`] everywhere.
    ///
    /// # Errors
    ///
    /// - Returns `DifferenceOutOfRange` for the first position, in
    ///   row-major order, whose difference is too large.
    #[inline]
    pub fn check_difference_range(r: &Block, p: &Block) -> Result<(), BlockError> {
        match r
            .data
            .iter()
            .zip(&p.data)
            .map(|(&r, &p)| i32::from(r) - i32::from(p))
            .enumerate()
            .find(|(_, difference)| difference.abs() > MAX_DIFFERENCE)
        {
            Some((i, difference)) => Err(BlockError::DifferenceOutOfRange {
                row: i / BLOCK_SIZE,
                col: i % BLOCK_SIZE,
                difference,
            }),
            None => Ok(()),
        }
    }
}

impl From<[[i16; BLOCK_SIZE]; BLOCK_SIZE]> for Block {
    #[inline]
    fn from(rows: [[i16; BLOCK_SIZE]; BLOCK_SIZE]) -> Self {
        Block::new(rows)
    }
}

impl From<Block> for [[i16; BLOCK_SIZE]; BLOCK_SIZE] {
    #[inline]
    fn from(block: Block) -> Self {
        block.rows()
    }
}

impl From<[i16; BLOCK_LEN]> for Block {
    #[inline]
    fn from(data: [i16; BLOCK_LEN]) -> Self {
        Block::from_flat(data)
    }
}

impl TryFrom<&[i16]> for Block {
    type Error = BlockError;

    #[inline]
    fn try_from(values: &[i16]) -> Result<Self, Self::Error> {
        let data = <[i16; BLOCK_LEN]>::try_from(values)
            .map_err(|_| BlockError::InvalidLength { len: values.len() })?;
        Ok(Block::from_flat(data))
    }
}

impl Display for Block {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks_exact(BLOCK_SIZE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:5}", value)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Errors raised when building or validating a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlockError {
    /// The source did not hold exactly [`BLOCK_LEN`] values.
    #[error("expected 16 values for a 4x4 block, got {len}")]
    InvalidLength {
        /// Number of values supplied.
        len: usize,
    },
    /// A value is outside the 8-bit sample range.
    #[error("value {value} at row {row}, column {col} is outside the sample range 0..=255")]
    SampleOutOfRange {
        /// Row of the offending value.
        row: usize,
        /// Column of the offending value.
        col: usize,
        /// The offending value.
        value: i16,
    },
    /// `R - P` is too large for the inverse transform to stay in `i16`.
    #[error(
        "difference {difference} at row {row}, column {col} exceeds the inverse transform limit of +-2047"
    )]
    DifferenceOutOfRange {
        /// Row of the offending difference.
        row: usize,
        /// Column of the offending difference.
        col: usize,
        /// `R - P` at that position.
        difference: i32,
    },
}
