use anyhow::{Result, bail};
use log::debug;
use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};
use tokio::{fs::File, io::AsyncWriteExt};

/// Output file written through a `.part` sibling.
///
/// The final path only appears after [`OutputFile::commit`]. Dropping the guard
/// before that removes the partial file.
pub struct OutputFile {
    file: Option<File>,
    path: PathBuf,
    temp_path: PathBuf,
    committed: bool,
}

impl OutputFile {
    pub async fn create(path: &Path, overwrite: bool) -> Result<Self> {
        if path.exists() && !overwrite {
            bail!(
                "{} already exists, use --force to overwrite it.",
                path.to_string_lossy()
            );
        }

        let temp_path = part_path(path);
        debug!("Writing to {}", temp_path.to_string_lossy());

        Ok(Self {
            file: Some(File::create(&temp_path).await?),
            path: path.to_owned(),
            temp_path,
            committed: false,
        })
    }

    pub async fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        let Some(file) = &mut self.file else {
            bail!("{} is already closed.", self.temp_path.to_string_lossy());
        };

        file.write_all(buf).await?;
        Ok(())
    }

    /// Flush and move the partial file to its final path.
    pub async fn commit(mut self) -> Result<PathBuf> {
        if let Some(mut file) = self.file.take() {
            file.flush().await?;
            file.sync_all().await?;
        }

        tokio::fs::rename(&self.temp_path, &self.path).await?;
        self.committed = true;
        Ok(self.path.clone())
    }
}

impl Drop for OutputFile {
    fn drop(&mut self) {
        if !self.committed {
            drop(self.file.take());

            if fs::remove_file(&self.temp_path).is_ok() {
                debug!("Deleted {}", self.temp_path.to_string_lossy());
            }
        }
    }
}

fn part_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|x| x.to_owned())
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".part");
    path.with_file_name(name)
}
