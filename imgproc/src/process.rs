use crate::Result;
use cv_core::{image_view, ImageArray, Matrix3d, Point2i};

/// Values returned by [`process_image`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutput {
    pub matrix: Matrix3d,
    pub point1: Point2i,
    pub point2: Point2i,
}

impl ProcessOutput {
    pub fn new(matrix: Matrix3d, point1: Point2i, point2: Point2i) -> Self {
        Self {
            matrix,
            point1,
            point2,
        }
    }

    pub fn into_tuple(self) -> (Matrix3d, Point2i, Point2i) {
        (self.matrix, self.point1, self.point2)
    }
}

/// Reference points reported for every processed image.
pub const POINT1: (i32, i32) = (100, 200);
pub const POINT2: (i32, i32) = (300, 400);

/// Return the 3x3 identity together with the two reference points.
///
/// Any 2-D or 3-D array is accepted, including empty ones and arbitrary
/// channel counts. Inputs with 1 to 4 channels are also wrapped as an 8-bit
/// image matrix.
pub fn process_image(image: &ImageArray<u8>) -> Result<ProcessOutput> {
    let _mat = image_view(image)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        shape = %image.shape(),
        color = ?_mat.as_ref().map(|m| m.color()),
        "processing image"
    );

    Ok(ProcessOutput::new(
        Matrix3d::identity(),
        Point2i::new(POINT1.0, POINT1.1),
        Point2i::new(POINT2.0, POINT2.1),
    ))
}
