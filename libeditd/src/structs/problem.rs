use super::Phase;

/// An edit distance instance with its two inputs ordered by length.
///
/// The roles are assigned once, when the problem is built: `max_seq` is the longer input and
/// `min_seq` the shorter one. When the lengths are equal the second input takes the `max` role.
#[derive(Clone, Copy, Debug)]
pub struct Problem<'a> {
    max_seq: &'a [u8],
    min_seq: &'a [u8],
}

impl<'a> Problem<'a> {
    pub fn new(seq_1: &'a [u8], seq_2: &'a [u8]) -> Self {
        let (max_seq, min_seq) = if seq_1.len() > seq_2.len() {
            (seq_1, seq_2)
        } else {
            (seq_2, seq_1)
        };
        Self { max_seq, min_seq }
    }

    pub fn max_seq(&self) -> &'a [u8] {
        self.max_seq
    }

    pub fn min_seq(&self) -> &'a [u8] {
        self.min_seq
    }

    pub fn max_len(&self) -> usize {
        self.max_seq.len()
    }

    pub fn min_len(&self) -> usize {
        self.min_seq.len()
    }

    /// The substitution cost of aligning `max_seq[x]` with `min_seq[y]`.
    #[inline]
    pub fn penalty(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.max_len());
        debug_assert!(y < self.min_len());
        (self.max_seq[x] != self.min_seq[y]) as usize
    }

    /// The number of anti-diagonals in the table, which is zero if either input is empty.
    pub fn total_iterations(&self) -> usize {
        match self.min_len() {
            0 => 0,
            min_len => self.max_len() + min_len - 1,
        }
    }

    pub fn phase(&self, iteration: usize) -> Phase {
        Phase::of(iteration, self.min_len(), self.max_len())
    }

    /// The number of table cells on anti-diagonal `iteration`.
    pub fn diagonal_len(&self, iteration: usize) -> usize {
        debug_assert!(iteration < self.total_iterations());
        match self.phase(iteration) {
            Phase::Growing => iteration + 1,
            Phase::Plateau => self.min_len(),
            Phase::Shrinking => self.total_iterations() - iteration,
        }
    }
}
