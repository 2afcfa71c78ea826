//! File service for bounded streaming uploads.

use actix_multipart::Multipart;
use actix_web::web::Bytes;
use futures::{Stream, StreamExt};
use log::{debug, info, warn};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::config::CONFIG;
use crate::constants::{
    CODE_FILE_UPLOAD_FAILED, CODE_INTERNAL_ERROR, ERR_FAILED_PROCESS_UPLOAD, ERR_FAILED_READ_FILE,
    ERR_FAILED_SAVE_FILE, ERR_NO_UPLOAD_FILE,
};
use crate::errors::ApiError;
use crate::validators::{validate_upload_filename, validate_upload_size, UPLOAD_FIELD_NAME};

/// Service for storing uploaded files under a byte ceiling.
pub struct FileService {
    upload_dir: PathBuf,
    max_size: usize,
}

impl FileService {
    /// Create a new FileService using the upload directory and ceiling from config.
    pub fn new() -> Self {
        Self::with_upload_dir(PathBuf::from(&CONFIG.upload_dir), CONFIG.max_upload_size)
    }

    /// Create a new FileService with a custom upload directory and ceiling.
    pub fn with_upload_dir(upload_dir: PathBuf, max_size: usize) -> Self {
        Self {
            upload_dir,
            max_size,
        }
    }

    /// Store the first multipart part named `file`.
    ///
    /// Returns the path the content was written to.
    pub async fn save_upload(&self, payload: &mut Multipart) -> Result<PathBuf, ApiError> {
        while let Some(item) = payload.next().await {
            let mut field = item.map_err(|e| {
                warn!("Failed to process multipart field: {}", e);
                ApiError::BadRequest {
                    code: CODE_FILE_UPLOAD_FAILED.to_string(),
                    message: ERR_FAILED_PROCESS_UPLOAD.to_string(),
                }
            })?;

            let (field_name, filename) = match field.content_disposition() {
                Some(cd) => (
                    cd.get_name().unwrap_or("").to_string(),
                    cd.get_filename().unwrap_or("").to_string(),
                ),
                None => continue,
            };

            if field_name != UPLOAD_FIELD_NAME {
                debug!("Skipping multipart field '{}'", field_name);
                continue;
            }

            return self.store_stream(&filename, &mut field).await;
        }

        Err(ApiError::BadRequest {
            code: CODE_FILE_UPLOAD_FAILED.to_string(),
            message: ERR_NO_UPLOAD_FILE.to_string(),
        })
    }

    /// Write `stream` to `<upload_dir>/<filename>` without buffering it in memory.
    ///
    /// Bytes go to a private staging file that is renamed into place only
    /// after the whole stream fit under the ceiling. Every other exit,
    /// including the future being dropped mid-stream, removes the staging
    /// file. An existing file with the same name is replaced.
    pub async fn store_stream<S, E>(
        &self,
        filename: &str,
        mut stream: S,
    ) -> Result<PathBuf, ApiError>
    where
        S: Stream<Item = Result<Bytes, E>> + Unpin,
        E: fmt::Display,
    {
        let filename = validate_upload_filename(filename)?;

        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| save_failed("create upload directory", e))?;

        let staged = StagedFile::new(&self.upload_dir);
        let mut file = tokio::fs::File::create(staged.path())
            .await
            .map_err(|e| save_failed("create file", e))?;

        let written = self.copy_chunks(&filename, &mut file, &mut stream).await;
        drop(file);
        let total_size = match written {
            Ok(total_size) => total_size,
            Err(e) => {
                staged.discard().await;
                return Err(e);
            }
        };

        let destination = self.upload_dir.join(&filename);
        staged
            .commit(&destination)
            .await
            .map_err(|e| save_failed("move file into place", e))?;

        info!(
            "Stored upload {} ({} bytes)",
            destination.display(),
            total_size
        );
        Ok(destination)
    }

    async fn copy_chunks<S, E>(
        &self,
        filename: &str,
        file: &mut tokio::fs::File,
        stream: &mut S,
    ) -> Result<usize, ApiError>
    where
        S: Stream<Item = Result<Bytes, E>> + Unpin,
        E: fmt::Display,
    {
        let mut total_size: usize = 0;
        while let Some(chunk) = stream.next().await {
            let data = chunk.map_err(|e| {
                warn!("Failed to read chunk: {}", e);
                ApiError::BadRequest {
                    code: CODE_FILE_UPLOAD_FAILED.to_string(),
                    message: ERR_FAILED_READ_FILE.to_string(),
                }
            })?;

            total_size += data.len();
            if let Err(e) = validate_upload_size(total_size, self.max_size) {
                warn!(
                    "Upload '{}' rejected after {} bytes (limit {})",
                    filename, total_size, self.max_size
                );
                return Err(e);
            }

            file.write_all(&data)
                .await
                .map_err(|e| save_failed("write file", e))?;
        }

        file.flush()
            .await
            .map_err(|e| save_failed("flush file", e))?;
        Ok(total_size)
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

fn save_failed(action: &str, e: io::Error) -> ApiError {
    warn!("Failed to {}: {}", action, e);
    ApiError::InternalServerError {
        code: CODE_INTERNAL_ERROR.to_string(),
        message: ERR_FAILED_SAVE_FILE.to_string(),
    }
}

/// Staging file that deletes itself unless committed.
struct StagedFile {
    path: PathBuf,
    committed: bool,
}

impl StagedFile {
    fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(format!(".{}.part", Uuid::new_v4())),
            committed: false,
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    async fn commit(mut self, destination: &Path) -> io::Result<()> {
        tokio::fs::rename(&self.path, destination).await?;
        self.committed = true;
        Ok(())
    }

    async fn discard(mut self) {
        if let Err(e) = tokio::fs::remove_file(&self.path).await {
            debug!("Failed to remove staging file {}: {}", self.path.display(), e);
        }
        self.committed = true;
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        // Only reached when the upload future is dropped mid-stream; Drop
        // cannot await, so the unlink is synchronous.
        if !self.committed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}
