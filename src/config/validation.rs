use super::defaults::{
    MAX_CATALOG_BYTES, MAX_DEADZONE, MAX_DEBOUNCE_MS, MAX_POLL_MS, MAX_STICK_GAIN,
    MAX_THROTTLE_MS,
};
use super::AppConfig;
use crate::catalog::SelectionCatalog;
use crate::input::{InputTuning, StickGain};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let mut config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values and normalize paths.
    pub fn validate(&mut self) -> Result<()> {
        if !self.deadzone.is_finite() || !(0.0..=MAX_DEADZONE).contains(&self.deadzone) {
            bail!(
                "--deadzone must be between 0.0 and {MAX_DEADZONE}, got {}",
                self.deadzone
            );
        }
        check_gain("--left-vertical-gain", self.left_vertical_gain)?;
        check_gain("--left-horizontal-gain", self.left_horizontal_gain)?;
        check_gain("--right-vertical-gain", self.right_vertical_gain)?;
        check_gain("--right-horizontal-gain", self.right_horizontal_gain)?;

        if !(1..=MAX_POLL_MS).contains(&self.poll_ms) {
            bail!(
                "--poll-ms must be between 1 and {MAX_POLL_MS}, got {}",
                self.poll_ms
            );
        }
        if self.throttle_ms < self.poll_ms || self.throttle_ms > MAX_THROTTLE_MS {
            bail!(
                "--throttle-ms must be between --poll-ms ({}) and {MAX_THROTTLE_MS}, got {}",
                self.poll_ms,
                self.throttle_ms
            );
        }
        if !(1..=MAX_DEBOUNCE_MS).contains(&self.debounce_ms) {
            bail!(
                "--debounce-ms must be between 1 and {MAX_DEBOUNCE_MS}, got {}",
                self.debounce_ms
            );
        }

        if let Some(path) = &mut self.catalog {
            *path = canonical_file(path, "--catalog", MAX_CATALOG_BYTES)?;
        }
        if let Some(path) = &mut self.controller_script {
            *path = canonical_file(path, "--controller-script", u64::MAX)?;
        }
        Ok(())
    }

    /// Snapshot the analog and timing settings for the input adapters.
    pub fn input_tuning(&self) -> InputTuning {
        InputTuning {
            deadzone: self.deadzone,
            left_gain: StickGain {
                vertical: self.left_vertical_gain,
                horizontal: self.left_horizontal_gain,
            },
            right_gain: StickGain {
                vertical: self.right_vertical_gain,
                horizontal: self.right_horizontal_gain,
            },
            poll_interval: Duration::from_millis(self.poll_ms),
            throttle_interval: Duration::from_millis(self.throttle_ms),
            debounce_cooldown: Duration::from_millis(self.debounce_ms),
        }
    }

    /// Load the configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<SelectionCatalog> {
        match &self.catalog {
            Some(path) => SelectionCatalog::load(path),
            None => Ok(SelectionCatalog::default()),
        }
    }
}

fn check_gain(flag: &str, value: f32) -> Result<()> {
    if !value.is_finite() || !(0.0..=MAX_STICK_GAIN).contains(&value) {
        bail!("{flag} must be between 0 and {MAX_STICK_GAIN}, got {value}");
    }
    Ok(())
}

/// Canonicalize a path and make sure it names a regular file of sane size.
pub(super) fn canonical_file(path: &Path, flag: &str, max_bytes: u64) -> Result<PathBuf> {
    let canonical = path
        .canonicalize()
        .with_context(|| format!("failed to canonicalize {flag} '{}'", path.display()))?;
    let metadata = fs::metadata(&canonical)
        .with_context(|| format!("failed to inspect {flag} '{}'", canonical.display()))?;
    if !metadata.is_file() {
        bail!("{flag} '{}' is not a file", canonical.display());
    }
    if metadata.len() > max_bytes {
        bail!(
            "{flag} '{}' is larger than {max_bytes} bytes",
            canonical.display()
        );
    }
    Ok(canonical)
}
