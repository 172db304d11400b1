use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::BookRepository;
use crate::book::Book;
use crate::errors::ServiceError;

/// JSON file-backed book collection.
///
/// Every `load` re-reads the file and every `save` rewrites it in full
/// (2-space pretty JSON). Nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct JsonFileBookStore {
    file_path: PathBuf,
}

impl JsonFileBookStore {
    /// Point at `path` without touching the filesystem.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into() }
    }

    /// Like [`new`](Self::new), but creates the parent directory and seeds
    /// the file with an empty array if it does not exist yet.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(ServiceError::write)?;
        }
        if fs::metadata(&file_path).await.is_err() {
            fs::write(&file_path, b"[]").await.map_err(ServiceError::write)?;
        }
        Ok(Self { file_path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

#[async_trait]
impl BookRepository for JsonFileBookStore {
    async fn load(&self) -> Result<Vec<Book>, ServiceError> {
        let bytes = fs::read(&self.file_path).await.map_err(ServiceError::read)?;
        serde_json::from_slice(&bytes).map_err(ServiceError::read)
    }

    async fn save(&self, books: &[Book]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(books).map_err(ServiceError::write)?;
        fs::write(&self.file_path, data).await.map_err(ServiceError::write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn tmp_file() -> PathBuf {
        std::env::temp_dir().join(format!("libros_store_{}.json", Uuid::new_v4()))
    }

    fn sample() -> Vec<Book> {
        vec![
            Book { id: crate::book::id::new_id(), title: "Dune".into(), author: "Herbert".into(), year: Some(1965) },
            Book { id: crate::book::id::new_id(), title: "Anonymous".into(), author: "Unknown".into(), year: None },
        ]
    }

    #[tokio::test]
    async fn save_then_load_keeps_order() -> Result<(), anyhow::Error> {
        let tmp = tmp_file();
        let store = JsonFileBookStore::new(&tmp);
        let books = sample();
        store.save(&books).await?;
        assert_eq!(store.load().await?, books);

        // a second handle on the same path sees the same data
        let reopened = JsonFileBookStore::new(&tmp);
        assert_eq!(reopened.load().await?, books);

        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn writes_two_space_pretty_json() -> Result<(), anyhow::Error> {
        let tmp = tmp_file();
        let store = JsonFileBookStore::new(&tmp);
        let books = sample();
        store.save(&books[..1]).await?;

        let text = fs::read_to_string(&tmp).await?;
        let expected = format!(
            "[\n  {{\n    \"id\": \"{}\",\n    \"title\": \"Dune\",\n    \"author\": \"Herbert\",\n    \"year\": 1965\n  }}\n]",
            books[0].id
        );
        assert_eq!(text, expected);

        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let store = JsonFileBookStore::new(tmp_file());
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, ServiceError::StorageRead { .. }));
        assert_eq!(err.to_string(), "Error al leer los datos de libros");
    }

    #[tokio::test]
    async fn invalid_json_is_a_read_error() -> Result<(), anyhow::Error> {
        let tmp = tmp_file();
        fs::write(&tmp, b"{ not json").await?;
        let store = JsonFileBookStore::new(&tmp);
        assert!(matches!(store.load().await, Err(ServiceError::StorageRead { .. })));

        // valid JSON, wrong shape
        fs::write(&tmp, b"{\"id\": 1}").await?;
        assert!(matches!(store.load().await, Err(ServiceError::StorageRead { .. })));

        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn unwritable_path_is_a_write_error() {
        let dir = std::env::temp_dir().join(format!("libros_missing_dir_{}", Uuid::new_v4()));
        let store = JsonFileBookStore::new(dir.join("libros.json"));
        let err = store.save(&sample()).await.unwrap_err();
        assert!(matches!(err, ServiceError::StorageWrite { .. }));
        assert_eq!(err.to_string(), "Error al guardar los datos de libros");
    }

    #[tokio::test]
    async fn open_seeds_empty_collection_once() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("libros_open_{}", Uuid::new_v4()));
        let path = dir.join("data").join("libros.json");
        let store = JsonFileBookStore::open(&path).await?;
        assert!(store.load().await?.is_empty());

        store.save(&sample()).await?;
        let again = JsonFileBookStore::open(&path).await?;
        assert_eq!(again.load().await?.len(), 2);
        assert_eq!(again.path(), path.as_path());

        let _ = fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
