mod sequential;
pub use sequential::{edit_distance, solve_sequential};

mod partition;
pub use partition::partition_chunks;

mod kernel;
pub use kernel::fill_chunk;

mod wavefront;
pub use wavefront::{wavefront_edit_distance, Wavefront, WavefrontParams, THREAD_MAX};
