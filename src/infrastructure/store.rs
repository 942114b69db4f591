//! # Custom Steak Store
//!
//! Flat text file backing for `SteakStore`: one entry per line, append-only.

use crate::domain::traits::SteakStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

pub struct FileSteakStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSteakStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Trimmed, non-blank lines in file order.
fn parse_entries(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[async_trait]
impl SteakStore for FileSteakStore {
    async fn load(&self) -> Result<Vec<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(parse_entries(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", self.path.display())),
        }
    }

    async fn append(&self, entry: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        // The handle is dropped at the end of this scope on every path.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        file.write_all(format!("{entry}\n").as_bytes())
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        file.flush().await?;

        tracing::debug!("Appended steak to {}", self.path.display());
        Ok(())
    }
}
