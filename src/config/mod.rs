//! User configuration stored under the platform config directory

pub mod settings;

pub use settings::{Config, get_config_dir, get_config_file_path, load_config, load_config_from, save_config, update_config_at};
