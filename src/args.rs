//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal viewer for the Harry Potter characters API.
#[derive(Debug, Parser)]
#[command(name = "hogdex", version, about)]
pub struct CliArgs {
    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL from config.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

impl CliArgs {
    /// Apply CLI overrides on top of a loaded config.
    ///
    /// Flags win over file values; anything not given on the command line
    /// is left untouched.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.base_url {
            config.api.base_url = url.clone();
        }
    }
}
