//! Serve command implementation

use crate::cli::error::CliError;
use crate::logging::init_logging;
use crate::server::{self, ServerConfig};
use std::path::PathBuf;
use tracing::info;

/// Arguments for the serve command
#[derive(Debug, Clone, Default)]
pub struct ServeArgs {
    /// Bind address override
    pub address: Option<String>,
    /// Port override
    pub port: Option<u16>,
    /// Configuration file
    pub config: Option<PathBuf>,
    /// Serve the UI from this directory instead of the embedded bundle
    pub assets_dir: Option<PathBuf>,
}

/// Resolve the effective configuration: file and environment, then flags
pub fn resolve_config(args: &ServeArgs) -> Result<ServerConfig, CliError> {
    let mut config = ServerConfig::load(args.config.as_deref())?;

    if let Some(address) = &args.address {
        config.server.address = address.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dir) = &args.assets_dir {
        if !dir.is_dir() {
            return Err(CliError::InvalidArgument(format!(
                "Assets directory does not exist: {}",
                dir.display()
            )));
        }
        config.assets.directory = Some(dir.clone());
    }

    // Fail before the runtime starts
    config.socket_addr()?;

    Ok(config)
}

/// Handle the serve command
pub fn handle_serve(args: &ServeArgs) -> Result<(), CliError> {
    let config = resolve_config(args)?;
    init_logging(config.logging.format);
    info!(
        address = %config.server.address,
        port = config.server.port,
        "Starting schema-validator"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::IoError(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server::serve(config))
        .map_err(|e| CliError::ServerError(format!("{:#}", e)))
}
