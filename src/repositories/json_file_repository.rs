use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::traits::AddressBookRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Address book repository backed by a single JSON file.
///
/// Saves go through a sibling `.tmp` file that is renamed over the target,
/// so an interrupted save leaves the previous book intact.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read address book");
                return Err(e.into());
            }
        };

        let book: AddressBook = serde_json::from_str(&contents)?;
        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Loaded address book"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(book)?;
        let temp = self.temp_path();

        fs::write(&temp, json)?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            warn!(path = %self.path.display(), error = %e, "Failed to replace address book");
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Saved address book"
        );
        Ok(())
    }
}
