use std::fmt::{Debug, Formatter};

/// Where an anti-diagonal sits relative to the shorter sequence's boundary.
///
/// While the wavefront is growing its cells are indexed from the top edge of the table. Once it
/// reaches the end of the shorter sequence the cells are indexed from the right edge instead,
/// which is why plateau and shrinking diagonals share one coordinate map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Growing,
    Plateau,
    Shrinking,
}

impl Phase {
    pub fn of(iteration: usize, min_len: usize, max_len: usize) -> Self {
        if iteration < min_len {
            Phase::Growing
        } else if iteration < max_len {
            Phase::Plateau
        } else {
            Phase::Shrinking
        }
    }

    /// Map the `cell_idx`th genuine cell of anti-diagonal `iteration` to table coordinates.
    #[inline]
    pub fn cell(
        self,
        iteration: usize,
        cell_idx: usize,
        current_len: usize,
        min_len: usize,
    ) -> Cell {
        match self {
            Phase::Growing => growing_cell(cell_idx, current_len),
            Phase::Plateau | Phase::Shrinking => receding_cell(iteration, cell_idx, min_len),
        }
    }

    /// Indices into the previous interleaved diagonal of the three cells that feed `cell_idx`.
    #[inline]
    pub fn predecessors(self, cell_idx: usize) -> Predecessors {
        match self {
            Phase::Growing => growing_predecessors(cell_idx),
            Phase::Plateau | Phase::Shrinking => receding_predecessors(cell_idx),
        }
    }

    /// The offset into the previous diagonal at which carried-forward cells begin.
    #[inline]
    pub fn merge_start(self) -> usize {
        match self {
            Phase::Growing => 0,
            Phase::Plateau | Phase::Shrinking => 2,
        }
    }
}

/// A position in the edit distance table: `x` indexes the longer sequence, `y` the shorter.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Signed indices into the previous diagonal; they may fall outside of it at the table edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Predecessors {
    pub left: isize,
    pub down: isize,
    pub diagonal: isize,
}

#[inline]
pub fn growing_cell(cell_idx: usize, current_len: usize) -> Cell {
    debug_assert!(cell_idx < current_len);
    Cell {
        x: cell_idx,
        y: current_len - cell_idx - 1,
    }
}

#[inline]
pub fn receding_cell(iteration: usize, cell_idx: usize, min_len: usize) -> Cell {
    debug_assert!(iteration >= min_len);
    debug_assert!(cell_idx < min_len);
    Cell {
        x: cell_idx + iteration - min_len + 1,
        y: min_len - cell_idx - 1,
    }
}

#[inline]
pub fn growing_predecessors(cell_idx: usize) -> Predecessors {
    let down = 2 * cell_idx as isize;
    Predecessors {
        left: down - 2,
        down,
        diagonal: down - 1,
    }
}

#[inline]
pub fn receding_predecessors(cell_idx: usize) -> Predecessors {
    let left = 2 * cell_idx as isize;
    Predecessors {
        left,
        down: left + 2,
        diagonal: left + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::Problem;

    fn cells_of(problem: &Problem, iteration: usize) -> Vec<Cell> {
        let phase = problem.phase(iteration);
        let current_len = problem.diagonal_len(iteration);
        (0..current_len)
            .map(|cell_idx| phase.cell(iteration, cell_idx, current_len, problem.min_len()))
            .collect()
    }

    #[test]
    fn test_phase_of() {
        assert_eq!(Phase::of(0, 3, 5), Phase::Growing);
        assert_eq!(Phase::of(2, 3, 5), Phase::Growing);
        assert_eq!(Phase::of(3, 3, 5), Phase::Plateau);
        assert_eq!(Phase::of(4, 3, 5), Phase::Plateau);
        assert_eq!(Phase::of(5, 3, 5), Phase::Shrinking);
        assert_eq!(Phase::of(3, 3, 3), Phase::Shrinking);
    }

    #[test]
    fn test_growing_cell() {
        assert_eq!(growing_cell(0, 3), Cell { x: 0, y: 2 });
        assert_eq!(growing_cell(1, 3), Cell { x: 1, y: 1 });
        assert_eq!(growing_cell(2, 3), Cell { x: 2, y: 0 });
    }

    #[test]
    fn test_receding_cell() {
        // iteration 4 of a 5x3 table: the plateau diagonal (2, 2), (3, 1), (4, 0)
        assert_eq!(receding_cell(4, 0, 3), Cell { x: 2, y: 2 });
        assert_eq!(receding_cell(4, 1, 3), Cell { x: 3, y: 1 });
        assert_eq!(receding_cell(4, 2, 3), Cell { x: 4, y: 0 });
    }

    #[test]
    fn test_predecessors() {
        assert_eq!(
            growing_predecessors(0),
            Predecessors {
                left: -2,
                down: 0,
                diagonal: -1
            }
        );
        assert_eq!(
            receding_predecessors(3),
            Predecessors {
                left: 6,
                down: 8,
                diagonal: 7
            }
        );
    }

    #[test]
    fn test_cells_cover_table() {
        for (seq_1, seq_2) in [
            (&b"abcdefg"[..], &b"xyz"[..]),
            (&b"abcd"[..], &b"efgh"[..]),
            (&b"a"[..], &b"bcdef"[..]),
            (&b"ab"[..], &b"c"[..]),
        ] {
            let problem = Problem::new(seq_1, seq_2);
            let mut seen = vec![vec![false; problem.min_len()]; problem.max_len()];

            for iteration in 0..problem.total_iterations() {
                let cells = cells_of(&problem, iteration);
                for cell in cells.iter() {
                    assert_eq!(cell.x + cell.y, iteration);
                    assert!(cell.x < problem.max_len());
                    assert!(cell.y < problem.min_len());
                    assert!(!seen[cell.x][cell.y], "cell {cell:?} visited twice");
                    seen[cell.x][cell.y] = true;
                }

                // cells are ordered along the diagonal by increasing x
                assert!(cells.windows(2).all(|pair| pair[0].x + 1 == pair[1].x));
            }

            assert!(seen.iter().flatten().all(|&visited| visited));
        }
    }

    #[test]
    fn test_predecessors_point_at_neighbors() {
        // the left and down predecessors of a cell are its neighbors on the previous diagonal
        let problem = Problem::new(b"abcdefg", b"xyz");

        for iteration in 1..problem.total_iterations() {
            let phase = problem.phase(iteration);
            let prev_cells = cells_of(&problem, iteration - 1);
            let cells = cells_of(&problem, iteration);

            for (cell_idx, cell) in cells.iter().enumerate() {
                let predecessors = phase.predecessors(cell_idx);

                if cell.x > 0 {
                    let left = prev_cells[predecessors.left as usize / 2];
                    assert_eq!(left, Cell { x: cell.x - 1, y: cell.y });
                } else {
                    assert!(predecessors.left < 0);
                }

                if cell.y > 0 {
                    let down = prev_cells[predecessors.down as usize / 2];
                    assert_eq!(down, Cell { x: cell.x, y: cell.y - 1 });
                } else {
                    assert!(predecessors.down as usize >= 2 * prev_cells.len() - 1);
                }
            }
        }
    }
}
