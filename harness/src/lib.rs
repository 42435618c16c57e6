//! Smoke-test harness for the `process_image` capability.
//!
//! The harness builds a random `(10, 10, 3)` image, hands it to an
//! [`ImageProcessor`] exactly once and prints the three returned values.
//! Nothing is printed unless the processor succeeds.

pub mod cli;
pub mod render;

use cv_core::{ArrayShape, ImageArray};
use cv_imgproc::ProcessOutput;
use rand::Rng;
use std::io::Write;

pub use cli::Args;
pub use render::{render_matrix, render_report};

pub const IMAGE_ROWS: usize = 10;
pub const IMAGE_COLS: usize = 10;
pub const IMAGE_CHANNELS: usize = 3;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("process_image failed: {0}")]
    Process(#[from] cv_imgproc::ImgprocError),

    #[error("Image error: {0}")]
    Image(#[from] cv_core::CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The capability under test.
pub trait ImageProcessor {
    fn process_image(&mut self, image: &ImageArray<f64>) -> Result<ProcessOutput>;
}

/// Calls `cv_imgproc::process_image`, casting the input to `u8` first the
/// same way the Python module does.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeProcessor;

impl ImageProcessor for NativeProcessor {
    fn process_image(&mut self, image: &ImageArray<f64>) -> Result<ProcessOutput> {
        Ok(cv_imgproc::process_image(&image.to_u8())?)
    }
}

/// Build the harness input: values drawn uniformly from `[0, 1)`.
pub fn random_image<R: Rng>(rng: &mut R) -> Result<ImageArray<f64>> {
    let shape = ArrayShape::new(IMAGE_ROWS, IMAGE_COLS, IMAGE_CHANNELS);
    Ok(ImageArray::from_fn(shape, |_, _, _| rng.gen::<f64>())?)
}

pub fn run<P, W>(processor: &mut P, image: &ImageArray<f64>, out: &mut W) -> Result<()>
where
    P: ImageProcessor + ?Sized,
    W: Write,
{
    tracing::debug!(input = %image, "calling process_image");
    let output = processor.process_image(image)?;

    out.write_all(render_report(&output).as_bytes())?;
    out.flush()?;
    Ok(())
}
