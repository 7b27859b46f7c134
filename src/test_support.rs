use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// On-disk payloads + wildcards layout backed by a temp directory.
pub(crate) struct Fixture {
    _temp_dir: TempDir,
    payloads_dir: PathBuf,
    wildcards_dir: PathBuf,
}

impl Fixture {
    /// Create a fixture with both `payloads/` and `wildcards/` present.
    pub(crate) fn new() -> Self {
        let fixture = Self::without_dirs();
        std::fs::create_dir_all(&fixture.payloads_dir).unwrap();
        std::fs::create_dir_all(&fixture.wildcards_dir).unwrap();
        fixture
    }

    /// Create a fixture where neither directory exists yet.
    pub(crate) fn without_dirs() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let payloads_dir = temp_dir.path().join("payloads");
        let wildcards_dir = temp_dir.path().join("wildcards");
        Self {
            _temp_dir: temp_dir,
            payloads_dir,
            wildcards_dir,
        }
    }

    pub(crate) fn payloads_dir(&self) -> &Path {
        &self.payloads_dir
    }

    pub(crate) fn wildcards_dir(&self) -> &Path {
        &self.wildcards_dir
    }

    pub(crate) fn write_payload(&self, file_name: &str, content: &str) -> PathBuf {
        write(&self.payloads_dir, file_name, content)
    }

    pub(crate) fn write_wildcard(&self, file_name: &str, content: &str) -> PathBuf {
        write(&self.wildcards_dir, file_name, content)
    }
}

fn write(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(file_name);
    std::fs::write(&path, content).unwrap();
    path
}

pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
