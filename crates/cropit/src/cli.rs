// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cropit_core::ReturnMode;

#[derive(Debug, Parser)]
#[command(name = "cropit", version, about = "Cropit — crop it.")]
pub struct Args {
    /// Override config file path (default: $XDG_CONFIG_HOME/cropit/cropit.rune)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/cropit/cropit.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Replay a scripted pointer gesture and print events and crop values
    Simulate {
        /// Rendered container size as WxH
        #[arg(long, default_value = "800x600")]
        container: String,

        /// Natural media size as WxH (defaults to the container size)
        #[arg(long)]
        media: Option<String>,

        /// Fixed aspect ratio (height/width)
        #[arg(long)]
        ratio: Option<f64>,

        /// Minimum region size, e.g. 50x50, 50x50px or 10x10%
        #[arg(long)]
        min_size: Option<String>,

        /// Maximum region size
        #[arg(long)]
        max_size: Option<String>,

        /// Initial region size (default 100x100%)
        #[arg(long)]
        start_size: Option<String>,

        /// Return mode for printed values (raw/ratio/real)
        #[arg(long)]
        mode: Option<ReturnMode>,

        /// Gesture steps: down:X,Y  move:X,Y  up
        #[arg(required = true)]
        steps: Vec<String>,
    },

    /// List the eight resize handles and their movable edges
    Handles,

    /// Load and validate the config file, printing the effective defaults
    CheckConfig,
}
