//! Orthonormal 8×8 DCT-II and its inverse.
//!
//! Blocks are stored row-major, index = row * 8 + col. No level shift is
//! applied, the inverse of [`forward`] is exactly [`inverse`] up to floating
//! point rounding.

use std::sync::OnceLock;

pub const BLOCK_SIZE: usize = 8;

pub type Block = [f64; BLOCK_SIZE * BLOCK_SIZE];

/// `COSINE[u][x] = C(u) * cos((2*x + 1) * u * PI / 16)` with C(0) = 1/sqrt(8), C(u>0) = 1/2
static COSINE: OnceLock<[[f64; BLOCK_SIZE]; BLOCK_SIZE]> = OnceLock::new();

fn cosine_table() -> &'static [[f64; BLOCK_SIZE]; BLOCK_SIZE] {
    COSINE.get_or_init(|| {
        let mut table = [[0.0f64; BLOCK_SIZE]; BLOCK_SIZE];
        for (u, row) in table.iter_mut().enumerate() {
            let norm = if u == 0 {
                1.0 / (BLOCK_SIZE as f64).sqrt()
            } else {
                0.5
            };
            for (x, value) in row.iter_mut().enumerate() {
                *value = norm
                    * ((2 * x + 1) as f64 * u as f64 * std::f64::consts::PI
                        / (2 * BLOCK_SIZE) as f64)
                        .cos();
            }
        }
        table
    })
}

/// samples → coefficients
pub fn forward(samples: &Block) -> Block {
    let cos = cosine_table();

    // rows
    let mut temp = [0.0f64; 64];
    for row in 0..BLOCK_SIZE {
        for u in 0..BLOCK_SIZE {
            temp[row * BLOCK_SIZE + u] = (0..BLOCK_SIZE)
                .map(|x| samples[row * BLOCK_SIZE + x] * cos[u][x])
                .sum();
        }
    }

    // columns
    let mut coefficients = [0.0f64; 64];
    for col in 0..BLOCK_SIZE {
        for v in 0..BLOCK_SIZE {
            coefficients[v * BLOCK_SIZE + col] = (0..BLOCK_SIZE)
                .map(|y| temp[y * BLOCK_SIZE + col] * cos[v][y])
                .sum();
        }
    }

    coefficients
}

/// coefficients → samples
pub fn inverse(coefficients: &Block) -> Block {
    let cos = cosine_table();

    // columns
    let mut temp = [0.0f64; 64];
    for col in 0..BLOCK_SIZE {
        for y in 0..BLOCK_SIZE {
            temp[y * BLOCK_SIZE + col] = (0..BLOCK_SIZE)
                .map(|v| coefficients[v * BLOCK_SIZE + col] * cos[v][y])
                .sum();
        }
    }

    // rows
    let mut samples = [0.0f64; 64];
    for row in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            samples[row * BLOCK_SIZE + x] = (0..BLOCK_SIZE)
                .map(|u| temp[row * BLOCK_SIZE + u] * cos[u][x])
                .sum();
        }
    }

    samples
}
