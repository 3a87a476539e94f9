//! JSON-file inbox of captured brain dump items.
//!
//! Stored at `<data_dir>/inbox.json` as an array of items, oldest first.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::braindump::BrainDumpItem;
use crate::energy::EnergyCategory;
use crate::error::{Result, StorageError};

/// Persistent list of brain dump items.
#[derive(Debug)]
pub struct Inbox {
    path: PathBuf,
    items: Vec<BrainDumpItem>,
}

impl Inbox {
    /// Open the inbox in the data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created or the inbox
    /// file cannot be read or parsed.
    pub fn open() -> Result<Self> {
        Self::open_at(data_dir()?.join("inbox.json"))
    }

    /// Open an inbox file at a specific path. A missing file is an empty inbox.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Vec::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
                path: path.clone(),
                message: e.to_string(),
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        tracing::debug!(path = %path.display(), items = items.len(), "opened inbox");
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn items(&self) -> &[BrainDumpItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in a given category.
    pub fn by_category(&self, category: EnergyCategory) -> Vec<&BrainDumpItem> {
        self.items
            .iter()
            .filter(|item| item.category == Some(category))
            .collect()
    }

    /// Append items in order.
    pub fn append(&mut self, items: impl IntoIterator<Item = BrainDumpItem>) {
        self.items.extend(items);
    }

    fn position(&self, id_or_prefix: &str) -> Result<usize, StorageError> {
        if let Some(index) = self.items.iter().position(|item| item.id == id_or_prefix) {
            return Ok(index);
        }
        let matches: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| !id_or_prefix.is_empty() && item.id.starts_with(id_or_prefix))
            .map(|(index, _)| index)
            .collect();
        match matches.as_slice() {
            [index] => Ok(*index),
            [] => Err(StorageError::ItemNotFound(id_or_prefix.to_string())),
            many => Err(StorageError::AmbiguousId {
                prefix: id_or_prefix.to_string(),
                count: many.len(),
            }),
        }
    }

    /// Find an item by full id or unique id prefix.
    pub fn find(&self, id_or_prefix: &str) -> Result<&BrainDumpItem> {
        let index = self.position(id_or_prefix)?;
        Ok(&self.items[index])
    }

    /// Override an item's category by hand.
    pub fn override_category(
        &mut self,
        id_or_prefix: &str,
        category: EnergyCategory,
    ) -> Result<&BrainDumpItem> {
        let index = self.position(id_or_prefix)?;
        let item = &mut self.items[index];
        item.override_category(category);
        Ok(&*item)
    }

    /// Remove an item and return it.
    pub fn remove(&mut self, id_or_prefix: &str) -> Result<BrainDumpItem> {
        let index = self.position(id_or_prefix)?;
        Ok(self.items.remove(index))
    }

    /// Remove every item, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        count
    }

    /// Write the inbox back to disk.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), items = self.items.len(), "saved inbox");
        Ok(())
    }
}
