pub mod io;
pub mod paths;

pub use io::{LossyLines, lossy_lines};
pub use paths::{base_name, file_stem};
