use std::sync::Arc;

use anyhow::Result;

use packetdeck::app::App;
use packetdeck::config;
use packetdeck::logging::{self, LogBuffer};

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure config directory exists (creates logs dir too)
    config::ensure_directories()?;

    let log_buffer = Arc::new(LogBuffer::new(10_000));

    // Initialize file logging BEFORE any tracing calls
    let (log_file_info, _guard) =
        logging::init_file_logging(config::logs_dir(), Arc::clone(&log_buffer))?;

    let mut app = App::new(Some(log_file_info))?;
    app.run().await
}
