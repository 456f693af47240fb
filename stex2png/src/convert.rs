use crate::{args::Args, output::OutputFile, progress::Progress, utils};
use anyhow::{Result, bail};
use colored::Colorize;
use log::{debug, info, warn};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use stex::PngResource;

#[derive(Debug, Serialize)]
struct Report {
    input: String,
    output: String,
    mime: &'static str,
    original_size: usize,
    output_size: usize,
}

impl Args {
    pub async fn execute(self) -> Result<()> {
        let report = self.convert().await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Ok(())
    }

    async fn convert(&self) -> Result<Report> {
        let name = self.display_name();
        let output_path = self.output_path();

        if output_path == self.input || same_file(&output_path, &self.input) {
            bail!("Output path is the same as the input path.");
        }

        if stex::has_stex_extension(&name) {
            info!("Processing file: {}", name.bold());
        } else {
            warn!(
                "{} doesn't have a .stex extension, processing anyway.",
                name.bold()
            );
        }

        let mut pb = Progress::new(&name, self.no_progress || self.quiet);
        let data = tokio::select! {
            data = stex::read::read_file(&self.input, |x| pb.update(x)) => data?,
            _ = tokio::signal::ctrl_c() => {
                bail!("Interrupted while reading {}.", self.input.to_string_lossy())
            }
        };
        drop(pb);

        debug!("Read {} bytes from {}", data.len(), self.input.to_string_lossy());

        let conversion = stex::convert(&data)?;
        let (original_size, output_size) = (conversion.original_size(), conversion.output_size());
        let resource = conversion.into_resource(&self.input_name());

        if let Some(directory) = &self.directory
            && self.output.is_none()
            && !directory.exists()
        {
            debug!("Creating {}", directory.to_string_lossy());
            tokio::fs::create_dir_all(directory).await?;
        }

        let output = save(&resource, &output_path, self.force).await?;

        info!("{}", "Conversion successful!".green().bold());
        info!("  Original: {}", utils::format_bytes(original_size as u64, 2));
        info!("  Output:   {}", utils::format_bytes(output_size as u64, 2));
        info!("Saved {}", output.to_string_lossy().bold());

        Ok(Report {
            input: self.input.to_string_lossy().into_owned(),
            output: output.to_string_lossy().into_owned(),
            mime: resource.mime(),
            original_size,
            output_size,
        })
    }
}

// Paths written differently can still point at the same file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

async fn save(resource: &PngResource, path: &Path, overwrite: bool) -> Result<PathBuf> {
    let mut output = OutputFile::create(path, overwrite).await?;
    output.write_all(resource.data()).await?;
    output.commit().await
}
