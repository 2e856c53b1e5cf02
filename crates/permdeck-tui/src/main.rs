//! permdeck entry point.

use clap::Parser;
use permdeck_core::Device;
use permdeck_tui::Runtime;

/// Capture-device authorization dashboard
#[derive(Parser, Debug)]
#[command(name = "permdeck")]
#[command(about = "Terminal dashboard for camera, microphone and screen capture authorization")]
#[command(version)]
struct Args {
    /// Device to select at startup
    #[arg(short, long, default_value = "camera")]
    device: Device,

    /// Use an in-memory permission backend instead of the operating system
    ///
    /// Every device starts not-determined and requests always grant. Useful
    /// for trying the UI without touching real privacy state.
    #[arg(long)]
    simulate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing()?;

    let runtime = if args.simulate {
        Runtime::simulated(args.device)?
    } else {
        Runtime::new(args.device)?
    };

    Ok(runtime.run().await?)
}

/// Route tracing output to a file when `RUST_LOG` is set; the terminal
/// itself belongs to the UI.
fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = std::fs::File::create("permdeck.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
