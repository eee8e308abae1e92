use std::ops::Index;

/// One anti-diagonal of the edit distance table in interleaved form.
///
/// It's stored in the following pattern:
///
/// ```text
/// [ d_0, m_0, d_1, m_1, ..., m_(L-2), d_(L-1) ]
/// ```
///
/// where:
///
/// ```text
/// L:    the number of table cells on the diagonal
/// d_k:  the distance computed for the kth cell of this diagonal
/// m_k:  a "merge" cell carried forward unchanged from the previous diagonal
/// ```
///
/// The merge cells are the diagonal predecessors needed by the next iteration, so the full
/// table never has to be materialized.
#[derive(Default, Clone, Debug)]
pub struct DiagonalBuffer {
    cells: Vec<usize>,
}

impl DiagonalBuffer {
    pub fn with_capacity(cell_count: usize) -> Self {
        Self {
            cells: Vec::with_capacity(Self::interleaved_len(cell_count)),
        }
    }

    /// The interleaved length of a diagonal holding `cell_count` table cells.
    pub fn interleaved_len(cell_count: usize) -> usize {
        (2 * cell_count).saturating_sub(1)
    }

    /// Resize the buffer to hold a diagonal of `cell_count` table cells, keeping the allocation.
    ///
    /// Old values are left in place; every slot is overwritten by the iteration that follows.
    pub fn reuse(&mut self, cell_count: usize) {
        self.cells.resize(Self::interleaved_len(cell_count), 0);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.cells
    }
}

impl Index<usize> for DiagonalBuffer {
    type Output = usize;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.cells[idx]
    }
}
