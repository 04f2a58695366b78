pub mod file_type;

pub use file_type::{detect_language, executable_path, file_stem, parent_dir};
