pub mod environment;
pub mod logging;
pub mod paths;

pub use environment::{DATASET_ENV_VAR, default_dataset_path, resolve_dataset_path};
pub use logging::init_logging;
pub use paths::{format_path_with_tilde, validate_file_size};
