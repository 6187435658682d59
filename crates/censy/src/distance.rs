//! Optimal String Alignment distance.
//!
//! This is Levenshtein distance extended with the transposition of two
//! adjacent characters as a single edit. Unlike the true Damerau-Levenshtein
//! distance, no substring may be edited more than once, so the triangle
//! inequality doesn't hold in general (`ca -> abc` is 3, not 2).

/// Minimal number of insertions, deletions, substitutions and adjacent
/// transpositions needed to turn `source` into `target`. Compares Unicode
/// scalar values, not bytes.
pub fn distance(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();

    osa(&source, &target)
}

pub(crate) fn osa<T: PartialEq>(source: &[T], target: &[T]) -> usize {
    let (m, n) = (source.len(), target.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut table = Table::new(m + 1, n + 1);

    for i in 0..=m {
        table[(i, 0)] = i;
    }
    for j in 0..=n {
        table[(0, j)] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(source[i - 1] != target[j - 1]);

            let mut best = (table[(i - 1, j)] + 1)
                .min(table[(i, j - 1)] + 1)
                .min(table[(i - 1, j - 1)] + cost);

            let transposed = i > 1
                && j > 1
                && source[i - 1] == target[j - 2]
                && source[i - 2] == target[j - 1];

            if transposed {
                best = best.min(table[(i - 2, j - 2)] + 1);
            }

            table[(i, j)] = best;
        }
    }

    table[(m, n)]
}

/// Row-major `rows x cols` matrix stored in a single allocation
struct Table {
    cols: usize,
    cells: Vec<usize>,
}

impl Table {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![0; rows * cols],
        }
    }
}

impl std::ops::Index<(usize, usize)> for Table {
    type Output = usize;

    fn index(&self, (row, col): (usize, usize)) -> &usize {
        &self.cells[row * self.cols + col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Table {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut usize {
        &mut self.cells[row * self.cols + col]
    }
}
