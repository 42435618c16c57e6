use clap::Parser;
use cv_bridge_harness::{random_image, run, Args, NativeProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let mut rng = args.rng();
    let image = random_image(&mut rng)?;
    tracing::info!(seed = ?args.seed, shape = %image.shape(), "generated input image");

    let stdout = std::io::stdout();
    run(&mut NativeProcessor, &image, &mut stdout.lock())?;
    Ok(())
}
