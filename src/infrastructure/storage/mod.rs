use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Root of the working directory holding per-request audio artifacts
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the directory for one request. Each request gets its own
    /// directory so concurrent conversions never share file names.
    pub async fn open_request(&self, request_id: Uuid) -> io::Result<RequestArtifacts> {
        let dir = self.root.join(request_id.to_string());
        fs::create_dir_all(&dir).await?;
        Ok(RequestArtifacts { dir })
    }
}

#[derive(Debug)]
pub struct RequestArtifacts {
    dir: PathBuf,
}

impl RequestArtifacts {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn chunk_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("chunk_{:04}.mp3", index))
    }

    pub async fn write_chunk(&self, index: usize, audio: &[u8]) -> io::Result<PathBuf> {
        let path = self.chunk_path(index);
        fs::write(&path, audio).await?;
        Ok(path)
    }

    /// Concatenate the given chunk files, in the order given, into
    /// `file_name`. Bytes are copied as-is.
    pub async fn assemble(&self, chunk_paths: &[PathBuf], file_name: &str) -> io::Result<PathBuf> {
        let output_path = self.dir.join(file_name);
        let mut output = File::create(&output_path).await?;

        for path in chunk_paths {
            let mut input = File::open(path).await?;
            tokio::io::copy(&mut input, &mut output).await?;
        }

        output.flush().await?;
        Ok(output_path)
    }
}
