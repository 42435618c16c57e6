pub use cv_bridge_harness as harness;
pub use cv_core as core;
pub use cv_imgproc as imgproc;

/// Run the full smoke test against the native capability with a fixed seed
/// and return the printed report.
pub fn smoke_report(seed: u64) -> harness::Result<String> {
    use rand::SeedableRng;

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let image = harness::random_image(&mut rng)?;
    let mut out = Vec::new();
    harness::run(&mut harness::NativeProcessor, &image, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
