/// A half-open range `[start_idx, stop_idx)` of one diagonal's interleaved index space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkSpan {
    pub start_idx: usize,
    pub stop_idx: usize,
}

impl ChunkSpan {
    pub fn len(&self) -> usize {
        self.stop_idx - self.start_idx
    }

    pub fn is_empty(&self) -> bool {
        self.start_idx == self.stop_idx
    }

    /// The number of freshly computed (even-indexed) cells in the span.
    pub fn subproblem_count(&self) -> usize {
        (self.len() + 1) / 2
    }
}

/// The work order for one worker on one iteration.
///
/// `prev` is the whole previous diagonal, shared by every chunk of the iteration. `cells` is
/// this chunk's own slice of the current diagonal, `current[span.start_idx..span.stop_idx]`.
#[derive(Debug)]
pub struct Chunk<'a> {
    pub iteration: usize,
    pub current_len: usize,
    pub span: ChunkSpan,
    pub prev: &'a [usize],
    pub cells: &'a mut [usize],
}
