use thiserror::Error;

#[derive(Error, Debug)]
pub enum WavefrontError {
    #[error("thread count must be at least 1")]
    ZeroThreads,
    #[error("too many threads: {requested} (must be at most {max})")]
    TooManyThreads { requested: usize, max: usize },
    #[error("minimum chunk size must be at least 1")]
    ZeroChunkSize,
    #[error("partition of {total_len} cells needs {chunks} chunks but only {threads} threads are available")]
    TooManyChunks {
        total_len: usize,
        chunks: usize,
        threads: usize,
    },
    #[error("failed to build wavefront thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("a worker failed to complete iteration {iteration}")]
    WorkerPanicked { iteration: usize },
}
