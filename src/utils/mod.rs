mod fs;
mod hash;

pub use fs::{file_identifiers, file_size, open_inputs};
pub use hash::{HashResult, compute_file_hash};
