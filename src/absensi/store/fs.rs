use super::fs_backend::FsBackend;
use super::record_store::{RecordStore, SeedPolicy};
use std::path::PathBuf;

/// Production store: JSON documents under a data directory.
pub type FileStore = RecordStore<FsBackend>;

impl RecordStore<FsBackend> {
    /// Open the store rooted at `data_dir`. The directory is created on first write.
    pub fn open_dir(data_dir: PathBuf, seed: SeedPolicy) -> Self {
        RecordStore::open(FsBackend::new(data_dir), seed)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.backend.root().to_path_buf()
    }
}
