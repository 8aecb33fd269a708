//! Output renderers for command results.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::client::{CliError, CliResult};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Yaml,
    Json,
    /// Indented JSON.
    Jsonp,
    Cbor,
}

impl OutputFormat {
    /// File extension used by `--writetofile`.
    pub(crate) const fn extension(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json | Self::Jsonp => "json",
            Self::Cbor => "cbor",
        }
    }

    const fn is_text(self) -> bool {
        !matches!(self, Self::Cbor)
    }
}

/// Encode `value` in `format`.
pub(crate) fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .map(String::into_bytes)
            .context("failed to format YAML"),
        OutputFormat::Json => serde_json::to_vec(value).context("failed to format JSON"),
        OutputFormat::Jsonp => {
            let mut buffer = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(
                &mut buffer,
                PrettyFormatter::with_indent(b"\t"),
            );
            value
                .serialize(&mut serializer)
                .context("failed to format JSON")?;
            Ok(buffer)
        }
        OutputFormat::Cbor => {
            let mut buffer = Vec::new();
            ciborium::into_writer(value, &mut buffer).context("failed to format CBOR")?;
            Ok(buffer)
        }
    }
}

/// Where and how command results are written.
#[derive(Clone, Debug)]
pub(crate) struct OutputOptions {
    pub(crate) format: OutputFormat,
    pub(crate) write_to_file: bool,
    pub(crate) directory: PathBuf,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Yaml,
            write_to_file: false,
            directory: PathBuf::from("."),
        }
    }
}

impl OutputOptions {
    /// Render `value` to stdout, or to a timestamped file with `--writetofile`.
    pub(crate) fn emit<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        if self.write_to_file {
            let path = self.write_file(value).map_err(CliError::failure)?;
            tracing::info!(path = %path.display(), "output written");
            return Ok(());
        }
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(value, &mut handle).map_err(CliError::failure)
    }

    pub(crate) fn write_to<T, W>(&self, value: &T, writer: &mut W) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        let mut bytes = render(value, self.format)?;
        if self.format.is_text() && !bytes.ends_with(b"\n") {
            bytes.push(b'\n');
        }
        writer.write_all(&bytes).context("failed to write output")?;
        writer.flush().context("failed to flush output")
    }

    pub(crate) fn write_file<T: Serialize + ?Sized>(&self, value: &T) -> Result<PathBuf> {
        let bytes = render(value, self.format)?;
        let path = self.directory.join(format!(
            "{}.{}",
            Utc::now().timestamp(),
            self.format.extension()
        ));
        let mut file = open_private(&path)?;
        file.write_all(&bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(unix)]
fn open_private(path: &Path) -> Result<std::fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> Result<std::fs::File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))
}
