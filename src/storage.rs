use std::env;
use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

use crate::error::Error;

const DEFAULT_UPLOAD_DIR: &str = "uploads/images";

fn upload_dir() -> PathBuf {
    env::var("UPLOAD_DIR")
        .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.into())
        .into()
}

/// Writes an uploaded image under the upload directory and returns the
/// stored path. The stored name is a fresh UUID with the upload's extension.
pub async fn store_image(file_name: &str, data: &[u8]) -> Result<String, Error> {
    store_image_in(&upload_dir(), file_name, data).await
}

pub async fn remove_image(path: &str) -> Result<(), std::io::Error> {
    fs::remove_file(path).await
}

async fn store_image_in(dir: &Path, file_name: &str, data: &[u8]) -> Result<String, Error> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("bin");

    let path = dir.join(format!("{}.{}", Uuid::new_v4(), ext));

    fs::create_dir_all(dir).await?;
    fs::write(&path, data).await?;

    Ok(path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_and_removes_an_image() {
        let dir = env::temp_dir().join(format!("loci-storage-test-{}", Uuid::new_v4()));

        let path = store_image_in(&dir, "empire.jpeg", b"not really a jpeg")
            .await
            .unwrap();

        assert!(path.ends_with(".jpeg"));
        assert_eq!(fs::read(&path).await.unwrap(), b"not really a jpeg");

        remove_image(&path).await.unwrap();
        assert!(fs::metadata(&path).await.is_err());

        fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn falls_back_to_a_bin_extension() {
        let dir = env::temp_dir().join(format!("loci-storage-test-{}", Uuid::new_v4()));

        let path = store_image_in(&dir, "noextension", b"bytes").await.unwrap();

        assert!(path.ends_with(".bin"));

        remove_image(&path).await.unwrap();
        fs::remove_dir_all(&dir).await.unwrap();
    }
}
