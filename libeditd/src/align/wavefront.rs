use std::panic::{self, AssertUnwindSafe};

use log::{debug, trace};
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use super::{fill_chunk, partition_chunks};
use crate::structs::{Chunk, ChunkSpan, DiagonalBuffer, Problem};
use crate::WavefrontError;

/// The hard cap on worker threads for one engine.
pub const THREAD_MAX: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WavefrontParams {
    /// The number of worker threads, and the most chunks any diagonal is split into
    pub thread_count: usize,
    /// The smallest number of interleaved cells a worker is handed
    pub min_chunk_size: usize,
}

impl Default for WavefrontParams {
    fn default() -> Self {
        Self {
            thread_count: 8,
            min_chunk_size: 64,
        }
    }
}

impl WavefrontParams {
    pub fn new(thread_count: usize, min_chunk_size: usize) -> Self {
        Self {
            thread_count,
            min_chunk_size,
        }
    }

    pub fn validate(&self) -> Result<(), WavefrontError> {
        if self.thread_count == 0 {
            Err(WavefrontError::ZeroThreads)
        } else if self.thread_count > THREAD_MAX {
            Err(WavefrontError::TooManyThreads {
                requested: self.thread_count,
                max: THREAD_MAX,
            })
        } else if self.min_chunk_size == 0 {
            Err(WavefrontError::ZeroChunkSize)
        } else {
            Ok(())
        }
    }
}

/// A parallel edit distance engine that sweeps the table one anti-diagonal at a time.
///
/// Cells on one anti-diagonal depend only on the two diagonals before it, so each diagonal is
/// split into chunks that are filled concurrently. The pool is joined after every diagonal;
/// no chunk of diagonal `i + 1` starts before every chunk of diagonal `i` has finished.
pub struct Wavefront {
    params: WavefrontParams,
    pool: ThreadPool,
}

impl Wavefront {
    pub fn new(params: WavefrontParams) -> Result<Self, WavefrontError> {
        params.validate()?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(params.thread_count)
            .thread_name(|idx| format!("wavefront-{idx}"))
            .build()?;

        Ok(Self { params, pool })
    }

    pub fn params(&self) -> WavefrontParams {
        self.params
    }

    pub fn solve(&self, problem: &Problem) -> Result<usize, WavefrontError> {
        if problem.min_len() == 0 {
            return Ok(problem.max_len());
        }

        let total_iterations = problem.total_iterations();
        debug!(
            "wavefront: max_len: {}, min_len: {}, iterations: {}, threads: {}, min chunk: {}",
            problem.max_len(),
            problem.min_len(),
            total_iterations,
            self.params.thread_count,
            self.params.min_chunk_size,
        );

        let mut prev = DiagonalBuffer::with_capacity(problem.min_len());
        let mut current = DiagonalBuffer::with_capacity(problem.min_len());

        for iteration in 0..total_iterations {
            let current_len = problem.diagonal_len(iteration);
            current.reuse(current_len);

            let spans = partition_chunks(
                current.len(),
                self.params.thread_count,
                self.params.min_chunk_size,
            )?;

            trace!(
                "iteration {iteration} ({:?}): {current_len} cells in {} chunks",
                problem.phase(iteration),
                spans.len()
            );

            self.advance(problem, iteration, current_len, &spans, &prev, &mut current)?;

            // the old previous diagonal's allocation becomes the next current diagonal
            std::mem::swap(&mut prev, &mut current);
        }

        debug_assert_eq!(prev.len(), 1);
        Ok(prev[0])
    }

    /// Fill `current` from `prev`, one pool task per span, and wait for all of them.
    fn advance(
        &self,
        problem: &Problem,
        iteration: usize,
        current_len: usize,
        spans: &[ChunkSpan],
        prev: &DiagonalBuffer,
        current: &mut DiagonalBuffer,
    ) -> Result<(), WavefrontError> {
        let prev = prev.as_slice();
        let mut rest = current.as_mut_slice();
        let mut chunks: Vec<Chunk> = Vec::with_capacity(spans.len());

        for &span in spans {
            let (cells, tail) = std::mem::take(&mut rest).split_at_mut(span.len());
            chunks.push(Chunk {
                iteration,
                current_len,
                span,
                prev,
                cells,
            });
            rest = tail;
        }
        debug_assert!(rest.is_empty());

        panic::catch_unwind(AssertUnwindSafe(|| {
            self.pool.scope(|scope| {
                for chunk in chunks {
                    scope.spawn(move |_| fill_chunk(problem, chunk));
                }
            })
        }))
        .map_err(|_| WavefrontError::WorkerPanicked { iteration })
    }
}

/// Build a one-off engine and compute the edit distance between two sequences with it.
pub fn wavefront_edit_distance(
    seq_1: &[u8],
    seq_2: &[u8],
    params: WavefrontParams,
) -> Result<usize, WavefrontError> {
    Wavefront::new(params)?.solve(&Problem::new(seq_1, seq_2))
}
