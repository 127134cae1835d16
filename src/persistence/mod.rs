pub mod backup;
pub mod files;
pub mod kv;
pub mod settings;
pub mod state;

pub use backup::{apply_backup, export_to_dir, export_to_file, read_backup};
pub use files::{
    atomic_write, ensure_data_dir, init_local_data_dir, kv_dir, log_file, report_file,
    settings_file,
};
pub use kv::{DirKvStore, KvStore};
#[cfg(test)]
pub use kv::MemoryKvStore;
pub use settings::{load_settings, save_settings, Settings};
pub use state::{Field, PlannerData, PlannerStorage};
