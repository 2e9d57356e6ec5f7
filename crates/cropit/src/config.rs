// Author: Dustin Pilgrim
// License: MIT

use std::env;
use std::path::{Path, PathBuf};

use rune_cfg::RuneConfig;

use cropit_core::ReturnMode;
use cropit_engine::{CropOptions, SizeSpec};

/// Defaults loaded from the user config file. Everything is optional; CLI
/// flags override whatever is set here.
#[derive(Debug, Clone, Default)]
pub struct CropitConfig {
    pub aspect_ratio: Option<f64>,
    pub min_size: Option<SizeSpec>,
    pub max_size: Option<SizeSpec>,
    pub start_size: Option<SizeSpec>,
    pub return_mode: Option<ReturnMode>,
}

impl CropitConfig {
    pub fn to_options(&self) -> CropOptions {
        let mut opts = CropOptions::default();
        opts.aspect_ratio = self.aspect_ratio;
        opts.min_size = self.min_size;
        opts.max_size = self.max_size;
        if let Some(start) = self.start_size {
            opts.start_size = start;
        }
        if let Some(mode) = self.return_mode {
            opts.return_mode = mode;
        }
        opts
    }
}

pub fn load(path: Option<&Path>) -> Result<CropitConfig, String> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_user_config_path(),
    };

    if !path.exists() {
        return Ok(CropitConfig::default());
    }

    let rc = RuneConfig::from_file(&path).map_err(|e| format!("failed to read config: {e}"))?;

    parse_config(&rc)
}

fn parse_config(rc: &RuneConfig) -> Result<CropitConfig, String> {
    let mut cfg = CropitConfig::default();

    if !rc.has("cropit") {
        return Ok(cfg);
    }

    // aspect_ratio
    if let Some(ratio) = rc
        .get_optional::<f64>("cropit.aspect_ratio")
        .map_err(|e| format!("config error at cropit.aspect_ratio: {e}"))?
    {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(format!(
                "config error at cropit.aspect_ratio: expected a positive number, got {ratio}"
            ));
        }
        cfg.aspect_ratio = Some(ratio);
    }

    // min_size / max_size / start_size
    cfg.min_size = parse_size_key(rc, "cropit.min_size")?;
    cfg.max_size = parse_size_key(rc, "cropit.max_size")?;
    cfg.start_size = parse_size_key(rc, "cropit.start_size")?;

    // return_mode
    if let Some(mode_str) = rc
        .get_optional::<String>("cropit.return_mode")
        .map_err(|e| format!("config error at cropit.return_mode: {e}"))?
    {
        cfg.return_mode = Some(
            mode_str
                .parse()
                .map_err(|e| format!("config error at cropit.return_mode: {e}"))?,
        );
    }

    Ok(cfg)
}

fn parse_size_key(rc: &RuneConfig, key: &str) -> Result<Option<SizeSpec>, String> {
    let Some(raw) = rc
        .get_optional::<String>(key)
        .map_err(|e| format!("config error at {key}: {e}"))?
    else {
        return Ok(None);
    };

    raw.parse()
        .map(Some)
        .map_err(|e| format!("config error at {key}: {e}"))
}

fn default_user_config_path() -> PathBuf {
    let dir: PathBuf = if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg)
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| ".".into());
        PathBuf::from(home).join(".config")
    };

    dir.join("cropit").join("cropit.rune")
}
