use super::block::{BLOCK_LEN, BLOCK_SIZE};

/// Multiplies every row of `data` by the sequency-ordered Hadamard matrix
/// and then every column, giving `A * data * A`.
///
/// Values are not normalized.
pub fn hadamard4x4(data: &mut [i16; BLOCK_LEN]) {
    // Horizontal transform.
    hadamard4_1d::<BLOCK_SIZE, 1>(data);

    // Vertical transform.
    hadamard4_1d::<1, BLOCK_SIZE>(data);
}

/// Applies the 4-point sequency-ordered FWHT along each of the four lines
/// of `data`. Line `i` starts at `i * STRIDE0` and its elements are
/// `STRIDE1` apart.
///
/// Maps `(x0, x1, x2, x3)` to
/// `(x0+x1+x2+x3, x0+x1-x2-x3, x0-x1-x2+x3, x0-x1+x2-x3)`, which is both
/// `row * A` and `A * column` since `A` is symmetric.
#[allow(clippy::erasing_op)]
#[allow(clippy::identity_op)]
fn hadamard4_1d<const STRIDE0: usize, const STRIDE1: usize>(data: &mut [i16; BLOCK_LEN]) {
    for i in 0..BLOCK_SIZE {
        let sub: &mut [i16] = &mut data[i * STRIDE0..];
        let (t0, t2) = butterfly(sub[0 * STRIDE1], sub[1 * STRIDE1]);
        let (t1, t3) = butterfly(sub[2 * STRIDE1], sub[3 * STRIDE1]);
        let (y0, y1) = butterfly(t0, t1);
        let (y3, y2) = butterfly(t2, t3);
        sub[0 * STRIDE1] = y0;
        sub[1 * STRIDE1] = y1;
        sub[2 * STRIDE1] = y2;
        sub[3 * STRIDE1] = y3;
    }
}

const fn butterfly(a: i16, b: i16) -> (i16, i16) {
    ((a + b), (a - b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::block::{Block, HADAMARD_4X4};

    fn multiply(lhs: &Block, rhs: &Block) -> Block {
        let mut out = [0i16; BLOCK_LEN];
        for row in 0..BLOCK_SIZE {
            for col in 0..BLOCK_SIZE {
                out[row * BLOCK_SIZE + col] = (0..BLOCK_SIZE)
                    .map(|k| lhs.get(row, k) * rhs.get(k, col))
                    .sum();
            }
        }
        Block::from_flat(out)
    }

    #[test]
    fn single_row_matches_matrix_product() {
        let mut data = [0i16; BLOCK_LEN];
        data[..BLOCK_SIZE].copy_from_slice(&[3, -7, 11, 5]);
        hadamard4_1d::<BLOCK_SIZE, 1>(&mut data);
        assert_eq!(&data[..BLOCK_SIZE], &[12, -20, 4, 16]);
        assert!(data[BLOCK_SIZE..].iter().all(|&v| v == 0));
    }

    #[test]
    fn unit_rows_reproduce_hadamard_matrix() {
        // I * A = A, row by row.
        let mut data = *Block::new([[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]])
            .as_flat();
        hadamard4_1d::<BLOCK_SIZE, 1>(&mut data);
        assert_eq!(Block::from_flat(data), HADAMARD_4X4);

        // A * I = A, column by column.
        let mut data = *Block::new([[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]])
            .as_flat();
        hadamard4_1d::<1, BLOCK_SIZE>(&mut data);
        assert_eq!(Block::from_flat(data), HADAMARD_4X4);
    }

    #[test]
    fn two_dimensional_matches_matrix_product() {
        let input = Block::new([
            [16, -3, 191, 16],
            [16, 16, 160, 16],
            [160, 16, 16, 16],
            [16, 287, 16, -129],
        ]);
        let expected = multiply(&multiply(&HADAMARD_4X4, &input), &HADAMARD_4X4);

        let mut data = *input.as_flat();
        hadamard4x4(&mut data);
        assert_eq!(Block::from_flat(data), expected);
    }

    #[test]
    fn applying_twice_scales_by_sixteen() {
        let input = Block::new([[1, 2, 3, 4], [-5, 6, -7, 8], [9, 0, 0, -9], [4, 3, 2, 1]]);
        let mut data = *input.as_flat();
        hadamard4x4(&mut data);
        hadamard4x4(&mut data);
        let expected: [i16; BLOCK_LEN] = std::array::from_fn(|i| input.as_flat()[i] * 16);
        assert_eq!(data, expected);
    }
}
