use log::trace;

use crate::structs::{Chunk, Problem};

/// Fill one chunk of the current anti-diagonal from the previous one.
///
/// Even offsets of the chunk receive freshly computed distances. Odd offsets are merge cells:
/// they are copied unchanged from the previous diagonal, where they serve as the diagonal
/// predecessors of the next iteration. Only `chunk.cells` is written.
pub fn fill_chunk(problem: &Problem, chunk: Chunk) {
    let Chunk {
        iteration,
        current_len,
        span,
        prev,
        cells,
    } = chunk;

    trace!(
        "start_idx: {}, stop_idx: {} iteration: {}",
        span.start_idx,
        span.stop_idx,
        iteration
    );

    debug_assert_eq!(cells.len(), span.len());
    debug_assert_eq!(span.start_idx % 2, 0);

    let phase = problem.phase(iteration);
    let min_len = problem.min_len();
    let prev_len = prev.len() as isize;

    // the distance from a table edge cell to the
    // empty prefix, plus the one edit to step off it
    let edge = iteration + 2;

    let first_cell_idx = span.start_idx / 2;
    for local_idx in 0..span.subproblem_count() {
        let cell_idx = first_cell_idx + local_idx;
        let cell = phase.cell(iteration, cell_idx, current_len, min_len);
        let predecessors = phase.predecessors(cell_idx);
        let penalty = problem.penalty(cell.x, cell.y);

        let left = if predecessors.left < 0 {
            edge
        } else {
            prev[predecessors.left as usize] + 1
        };

        let down = if predecessors.down < prev_len {
            prev[predecessors.down as usize] + 1
        } else {
            edge
        };

        let diagonal = if (0..prev_len).contains(&predecessors.diagonal) {
            prev[predecessors.diagonal as usize] + penalty
        } else {
            iteration + penalty
        };

        cells[local_idx * 2] = left.min(down).min(diagonal);
    }

    let merge_offset = phase.merge_start() + span.start_idx;
    for local_idx in (1..span.len()).step_by(2) {
        cells[local_idx] = prev[merge_offset + local_idx - 1];
    }
}
