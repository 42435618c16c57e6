use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generate a random 10x10x3 image, run it through process_image and print
/// the returned matrix and points.
#[derive(Debug, Parser)]
#[command(name = "cv-bridge-smoke", version)]
pub struct Args {
    /// Seed for the input image. Drawn from OS entropy when omitted.
    #[arg(long, env = "CV_BRIDGE_SEED")]
    pub seed: Option<u64>,
}

impl Args {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
