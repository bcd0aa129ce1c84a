//! Bundled Markdown copies under `docs_dir`

use std::path::Path;

use crate::errors::{DocError, DocResult};

/// Read `path` asynchronously.
///
/// # Errors
///
/// `DocError::NotFound` when the file is absent, `DocError::Io` otherwise.
pub async fn read_doc(path: &Path) -> DocResult<String> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => Err(map_read_error(path, e)),
    }
}

/// Blocking variant of [`read_doc`] for the synchronous loader.
///
/// # Errors
///
/// Same as [`read_doc`].
pub fn read_doc_sync(path: &Path) -> DocResult<String> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => Err(map_read_error(path, e)),
    }
}

fn map_read_error(path: &Path, e: std::io::Error) -> DocError {
    if e.kind() == std::io::ErrorKind::NotFound {
        DocError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        DocError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_existing_and_missing() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("button.md");
        std::fs::write(&path, "# Button\n")?;

        assert_eq!(read_doc(&path).await?, "# Button\n");
        assert_eq!(read_doc_sync(&path)?, "# Button\n");

        let missing = dir.path().join("nope.md");
        assert!(read_doc(&missing).await.is_err_and(|e| e.is_not_found()));
        assert!(read_doc_sync(&missing).is_err_and(|e| e.is_not_found()));
        Ok(())
    }
}
