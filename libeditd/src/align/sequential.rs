use crate::structs::Problem;

/// Compute the edit distance between two sequences one table column at a time.
pub fn edit_distance(seq_1: &[u8], seq_2: &[u8]) -> usize {
    solve_sequential(&Problem::new(seq_1, seq_2))
}

/// Fill the table column by column, keeping only the previous column.
///
/// Each column runs along the shorter sequence, so memory is linear in `min_len`.
pub fn solve_sequential(problem: &Problem) -> usize {
    let max_len = problem.max_len();
    let min_len = problem.min_len();

    if min_len == 0 {
        return max_len;
    }

    let mut prev: Vec<usize> = vec![0; min_len];
    let mut column: Vec<usize> = vec![0; min_len];

    // the first column has no predecessor column,
    // so the base cases stand in for left and diagonal
    prev[0] = problem.penalty(0, 0);
    for y in 1..min_len {
        let down = prev[y - 1] + 1;
        let diagonal = y + problem.penalty(0, y);
        prev[y] = down.min(diagonal);
    }

    for x in 1..max_len {
        let left = prev[0] + 1;
        let down = x + 2;
        let diagonal = x + problem.penalty(x, 0);
        column[0] = left.min(down).min(diagonal);

        for y in 1..min_len {
            let left = prev[y] + 1;
            let down = column[y - 1] + 1;
            let diagonal = prev[y - 1] + problem.penalty(x, y);
            column[y] = left.min(down).min(diagonal);
        }

        std::mem::swap(&mut prev, &mut column);
    }

    prev[min_len - 1]
}
