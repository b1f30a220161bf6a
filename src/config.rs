//! # Run Configuration
//!
//! A configuration file names the inputs and output of a run, one
//! `Key = Value` pair per line:
//!
//! ```text
//! ; paths are relative to this file
//! RomPath     = game.sfc
//! VectorsPath = vectors.txt
//! OutputPath  = game.asm
//! Verbose     = yes
//! ```
//!
//! Keys are case-insensitive and unknown keys are ignored. An `OutputPath`
//! of `-` means standard output.

use crate::text::{content_lines, parse_bool, TextError};
use std::fs;
use std::path::{Path, PathBuf};

/// Output path that selects standard output.
pub const STDOUT_PATH: &str = "-";

/// A required setting is missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{file}: {key} is required")]
    MissingKey { file: String, key: &'static str },
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// ROM image to disassemble
    pub rom_path: PathBuf,

    /// Vector list
    pub vectors_path: PathBuf,

    /// Listing destination, or `-` for standard output
    pub output_path: PathBuf,

    /// Enable debug logging
    pub verbose: bool,
}

impl Config {
    /// Parse configuration text. Relative paths are resolved against
    /// `base_dir`; `file` is used in error messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use disasm816::Config;
    /// use std::path::{Path, PathBuf};
    ///
    /// let text = "romPath = game.sfc\nVECTORSPATH=v.txt\nOutputPath = -\n";
    /// let config = Config::parse(text, Path::new("work"), "game.cfg").unwrap();
    ///
    /// assert_eq!(config.rom_path, PathBuf::from("work/game.sfc"));
    /// assert_eq!(config.output_path, PathBuf::from("-"));
    /// assert!(!config.verbose);
    /// ```
    ///
    /// # Errors
    ///
    /// [`TextError`] for a malformed line or value, [`ConfigError`] when a
    /// required key is missing.
    pub fn parse(text: &str, base_dir: &Path, file: &str) -> crate::Result<Self> {
        let mut rom_path = None;
        let mut vectors_path = None;
        let mut output_path = None;
        let mut verbose = false;

        for (line, content) in content_lines(text) {
            let (key, value) = content
                .split_once('=')
                .map(|(key, value)| (key.trim(), value.trim()))
                .filter(|(key, _)| !key.is_empty())
                .ok_or_else(|| TextError::new(file, line, 1, "expected Key=Value"))?;

            let path = |value: &str| -> Result<PathBuf, TextError> {
                match value {
                    "" => Err(TextError::new(file, line, 2, "expected file path")),
                    STDOUT_PATH => Ok(PathBuf::from(STDOUT_PATH)),
                    _ => Ok(base_dir.join(value)),
                }
            };

            match key.to_ascii_lowercase().as_str() {
                "rompath" => rom_path = Some(path(value)?),
                "vectorspath" => vectors_path = Some(path(value)?),
                "outputpath" => output_path = Some(path(value)?),
                "verbose" => {
                    verbose = parse_bool(value)
                        .ok_or_else(|| TextError::new(file, line, 2, "expected true or false"))?;
                }
                _ => log::debug!("{}:{}: ignoring unknown key {}", file, line, key),
            }
        }

        let require = |value: Option<PathBuf>, key: &'static str| {
            value.ok_or_else(|| ConfigError::MissingKey {
                file: file.to_string(),
                key,
            })
        };

        Ok(Self {
            rom_path: require(rom_path, "RomPath")?,
            vectors_path: require(vectors_path, "VectorsPath")?,
            output_path: require(output_path, "OutputPath")?,
            verbose,
        })
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&text, base_dir, &path.display().to_string())
    }

    /// True if the listing goes to standard output.
    pub fn writes_to_stdout(&self) -> bool {
        self.output_path.as_os_str() == STDOUT_PATH
    }
}
