mod chunk;
pub use chunk::{Chunk, ChunkSpan};

mod diagonal;
pub use diagonal::DiagonalBuffer;

mod phase;
pub use phase::{
    growing_cell, growing_predecessors, receding_cell, receding_predecessors, Cell, Phase,
    Predecessors,
};

mod problem;
pub use problem::Problem;
