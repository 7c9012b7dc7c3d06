//! Candidate file discovery module

pub mod directory;
pub mod filter;

pub use directory::find_json_files;
pub use filter::is_json_file;
