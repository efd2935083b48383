//! Lazy pairwise-swap neighborhood.

/// Iterator over unordered position pairs `(i, j)` with `i < j < n`.
///
/// Yields `n * (n - 1) / 2` pairs in row-major order. Applying `swap(i, j)`
/// to a tour gives one neighbor; since `swap(i, j) == swap(j, i)` each
/// neighbor appears exactly once. Consumed once per sweep.
#[derive(Debug, Clone)]
pub struct SwapPairs {
    n: usize,
    i: usize,
    j: usize,
}

impl SwapPairs {
    pub fn new(n: usize) -> Self {
        Self { n, i: 0, j: 1 }
    }
}

impl Iterator for SwapPairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.j >= self.n {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= self.n {
                return None;
            }
        }
        let pair = (self.i, self.j);
        self.j += 1;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.i + 1 >= self.n {
            0
        } else {
            let rest_of_row = self.n.saturating_sub(self.j);
            let below = self.n - self.i - 1;
            rest_of_row + below * (below - 1) / 2
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SwapPairs {}
