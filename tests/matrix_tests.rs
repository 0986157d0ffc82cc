// Brute-force checks for the GF(2) matrix: rank, kernel, and the entry
// and row operations.

use qsieve::core::rng::SieveRng;
use qsieve::matrix::bit_matrix::BitMatrix;

/// Reference GF(2) rank by naive elimination on a copy.
fn reference_rank(mut rows: Vec<Vec<bool>>) -> usize {
    if rows.is_empty() {
        return 0;
    }
    let cols = rows[0].len();
    let mut rank = 0;
    for col in 0..cols {
        let Some(pivot) = (rank..rows.len()).find(|&r| rows[r][col]) else {
            continue;
        };
        rows.swap(rank, pivot);
        for r in 0..rows.len() {
            if r != rank && rows[r][col] {
                for c in 0..cols {
                    rows[r][c] ^= rows[rank][c];
                }
            }
        }
        rank += 1;
        if rank == rows.len() {
            break;
        }
    }
    rank
}

fn random_matrix(rng: &mut SieveRng, rows: usize, cols: usize) -> (BitMatrix, Vec<Vec<bool>>) {
    let mut matrix = BitMatrix::new(rows, cols).unwrap();
    let mut mirror = vec![vec![false; cols]; rows];
    for i in 0..rows {
        for j in 0..cols {
            if rng.next_bool() {
                matrix.set(i as i64, j as i64, true);
                mirror[i][j] = true;
            }
        }
    }
    (matrix, mirror)
}

#[test]
fn rank_matches_brute_force() {
    let mut rng = SieveRng::from_seed([42u8; 32]);
    for _ in 0..50 {
        let rows = 1 + rng.below(20) as usize;
        let cols = 1 + rng.below(20) as usize;
        let (mut matrix, mirror) = random_matrix(&mut rng, rows, cols);
        let rank = matrix.row_reduction();
        assert_eq!(rank, reference_rank(mirror), "rank of a {}x{} matrix", rows, cols);
        assert_eq!(matrix.rank(), Some(rank));
    }
}

#[test]
fn reduced_rows_have_unique_pivots() {
    let mut rng = SieveRng::from_seed([43u8; 32]);
    for _ in 0..20 {
        let rows = 1 + rng.below(20) as usize;
        let cols = 1 + rng.below(20) as usize;
        let (mut matrix, _) = random_matrix(&mut rng, rows, cols);
        matrix.row_reduction();

        let mut seen = Vec::new();
        for i in 0..rows {
            let pivot = (0..cols).find(|&j| matrix.get(i as i64, j as i64));
            if let Some(col) = pivot {
                assert!(!seen.contains(&col), "duplicate pivot column {}", col);
                // A pivot column is zero everywhere else.
                for other in 0..rows {
                    if other != i {
                        assert!(!matrix.get(other as i64, col as i64));
                    }
                }
                seen.push(col);
            }
        }
    }
}

#[test]
fn kernel_vectors_annihilate_the_original_matrix() {
    let mut rng = SieveRng::from_seed([44u8; 32]);
    for _ in 0..50 {
        let rows = 1 + rng.below(20) as usize;
        let cols = 1 + rng.below(20) as usize;
        let (mut matrix, mirror) = random_matrix(&mut rng, rows, cols);
        let rank = matrix.row_reduction();
        let kernel = matrix.kernel();

        assert_eq!(kernel.len(), cols - rank, "nullity of a {}x{} matrix", rows, cols);

        for vector in &kernel {
            assert_eq!(vector.len(), cols);
            for row in &mirror {
                let mut parity = false;
                for j in 0..cols {
                    parity ^= row[j] && vector[j];
                }
                assert!(!parity, "kernel vector escapes the null space");
            }
        }
    }
}

#[test]
fn kernel_vectors_are_linearly_independent() {
    let mut rng = SieveRng::from_seed([45u8; 32]);
    for _ in 0..20 {
        let rows = 1 + rng.below(15) as usize;
        let cols = 2 + rng.below(15) as usize;
        let (mut matrix, _) = random_matrix(&mut rng, rows, cols);
        matrix.row_reduction();
        let kernel = matrix.kernel();
        if kernel.is_empty() {
            continue;
        }

        // Stack the vectors as rows; full rank means independence.
        let stacked: Vec<Vec<bool>> = kernel
            .iter()
            .map(|v| (0..cols).map(|j| v[j]).collect())
            .collect();
        assert_eq!(reference_rank(stacked), kernel.len());
    }
}

#[test]
fn wraparound_indexing_is_floor_modulo() {
    let mut matrix = BitMatrix::new(3, 5).unwrap();
    matrix.set(1, 2, true);
    assert!(matrix.get(1, 2));
    assert!(matrix.get(-2, -3));
    assert!(matrix.get(4, 7));
    assert!(matrix.get(-5, -13));
    matrix.set(-1, -1, true);
    assert!(matrix.get(2, 4));
}

#[test]
fn entry_operations() {
    let mut matrix = BitMatrix::new(2, 2).unwrap();

    matrix.flip(0, 0);
    assert!(matrix.get(0, 0));
    matrix.xor_bit(0, 0, true);
    assert!(!matrix.get(0, 0));
    matrix.xor_bit(0, 0, false);
    assert!(!matrix.get(0, 0));

    matrix.set(1, 1, true);
    matrix.and_bit(1, 1, true);
    assert!(matrix.get(1, 1));
    matrix.and_bit(1, 1, false);
    assert!(!matrix.get(1, 1));

    matrix.set(1, 0, true);
    matrix.clear_bit(1, 0);
    assert!(!matrix.get(1, 0));
}

#[test]
fn bulk_fill_and_row_operations() {
    let mut matrix = BitMatrix::new(3, 4).unwrap();

    matrix.fill(true);
    assert!((0..3).all(|i| (0..4).all(|j| matrix.get(i, j))));
    matrix.fill(false);
    assert!((0..3).all(|i| (0..4).all(|j| !matrix.get(i, j))));

    matrix.fill_row(1, true);
    assert!((0..4).all(|j| matrix.get(1, j)));
    assert!((0..4).all(|j| !matrix.get(0, j)));

    matrix.fill_column(2, true);
    assert!((0..3).all(|i| matrix.get(i, 2)));

    matrix.fill(false);
    matrix.set(0, 0, true);
    matrix.set(0, 3, true);
    matrix.set(2, 1, true);
    matrix.swap_rows(0, 2);
    assert!(matrix.get(2, 0) && matrix.get(2, 3) && matrix.get(0, 1));
    assert!(!matrix.get(0, 0) && !matrix.get(0, 3) && !matrix.get(2, 1));

    // 2 ^= 0: positions 0 and 3 toggle on top of position 1.
    matrix.swap_rows(0, 2);
    matrix.xor_rows(2, 0);
    assert!(matrix.get(2, 0) && matrix.get(2, 1) && matrix.get(2, 3));
    matrix.xor_rows(2, 0);
    assert!(!matrix.get(2, 0) && matrix.get(2, 1) && !matrix.get(2, 3));
}

#[test]
fn rank_is_cleared_by_mutation() {
    let mut matrix = BitMatrix::new(2, 3).unwrap();
    matrix.set(0, 0, true);
    matrix.row_reduction();
    assert!(matrix.rank().is_some());
    matrix.set(1, 1, true);
    assert_eq!(matrix.rank(), None);
}
