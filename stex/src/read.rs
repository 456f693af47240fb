//! Async helpers for loading a texture before conversion.
//!
//! Reading is the only suspending step, [`convert`](crate::convert) runs on the complete buffer
//! afterwards. Dropping a read future abandons it without touching any other state.

use crate::Result;
use std::path::Path;
use tokio::{
    fs::File,
    io::{AsyncRead, AsyncReadExt},
};

const CHUNK_SIZE: usize = 64 * 1024;

/// Bytes read so far out of the expected total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadProgress {
    pub read: u64,
    pub total: Option<u64>,
}

impl ReadProgress {
    /// Rounded percentage, `None` when the total is unknown or zero.
    pub fn percent(&self) -> Option<u8> {
        match self.total {
            Some(total) if total > 0 => {
                let percent = (self.read as f64 / total as f64 * 100.0).round();
                Some(percent.clamp(0.0, 100.0) as u8)
            }
            _ => None,
        }
    }
}

/// Read `reader` until EOF, reporting progress after each chunk.
///
/// A first notification with zero bytes read is sent before reading starts.
pub async fn read_to_end<R, F>(mut reader: R, total: Option<u64>, mut on_progress: F) -> Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
    F: FnMut(ReadProgress),
{
    let mut data = Vec::with_capacity(total.map(|x| x as usize).unwrap_or_default());
    let mut chunk = vec![0; CHUNK_SIZE];

    on_progress(ReadProgress { read: 0, total });

    loop {
        let size = reader.read(&mut chunk).await?;

        if size == 0 {
            break;
        }

        data.extend_from_slice(&chunk[..size]);
        on_progress(ReadProgress {
            read: data.len() as u64,
            total,
        });
    }

    Ok(data)
}

/// Read the file at `path`, using its metadata length as the expected total.
pub async fn read_file<P, F>(path: P, on_progress: F) -> Result<Vec<u8>>
where
    P: AsRef<Path>,
    F: FnMut(ReadProgress),
{
    let file = File::open(path).await?;
    let total = file.metadata().await?.len();
    read_to_end(file, Some(total), on_progress).await
}
