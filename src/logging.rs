// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Leveled logging.
//!
//! Development builds log at `debug`, release builds only report warnings
//! and errors. `RUST_LOG` overrides both. The viewer owns the terminal, so
//! log lines go to a file next to the configuration file.

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter,
    filter::Directive,
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::AppConfig;

const DEV_DIRECTIVE: &str = "charview=debug";
const RELEASE_DIRECTIVE: &str = "charview=warn";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to install the global subscriber")]
    Init(#[from] TryInitError),
}

/// Builds the log filter.
///
/// `RUST_LOG` wins when set and valid. Otherwise the configured filter is
/// used, raised to `debug` in development mode; an invalid configured
/// filter falls back to the mode's default directive.
pub fn build_filter(configured: &str, dev: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let fallback = if dev { DEV_DIRECTIVE } else { RELEASE_DIRECTIVE };
    let filter = EnvFilter::try_new(configured).unwrap_or_else(|e| {
        eprintln!("invalid log filter {configured:?}: {e}, using {fallback:?}");
        EnvFilter::new(fallback)
    });

    match DEV_DIRECTIVE.parse::<Directive>() {
        Ok(directive) if dev => filter.add_directive(directive),
        _ => filter,
    }
}

/// Installs the global subscriber, writing to `log_path`.
///
/// # Errors
///
/// Returns [`LoggingError::Io`] if the log file cannot be created and
/// [`LoggingError::Init`] if a global subscriber is already installed.
pub fn init_logging(cfg: &AppConfig, dev: bool, log_path: &Path) -> Result<(), LoggingError> {
    let file = File::create(log_path).map_err(|source| LoggingError::Io {
        path: log_path.to_path_buf(),
        source,
    })?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_filter(&cfg.log_filter, dev))
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(path = %log_path.display(), dev, "logging initialised");
    Ok(())
}
