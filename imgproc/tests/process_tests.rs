use cv_core::{ArrayShape, CoreError, ImageArray, Matrix3d, Point2i};
use cv_imgproc::{process_image, ProcessOutput};

fn rgb_image(rows: usize, cols: usize) -> ImageArray<u8> {
    ImageArray::from_fn(ArrayShape::new(rows, cols, 3), |r, c, ch| (r + c + ch) as u8).unwrap()
}

#[test]
fn test_process_rgb_returns_identity_and_points() {
    let out = process_image(&rgb_image(10, 10)).unwrap();

    assert_eq!(out.matrix, Matrix3d::identity());
    assert_eq!(out.point1, Point2i::new(100, 200));
    assert_eq!(out.point2, Point2i::new(300, 400));
}

#[test]
fn test_process_gray_2d() {
    let img = ImageArray::from_dims(&[4, 6], vec![7u8; 24]).unwrap();
    let (m, p1, p2) = process_image(&img).unwrap().into_tuple();

    assert_eq!(m[(0, 0)], 1.0);
    assert_eq!(m[(0, 1)], 0.0);
    assert_eq!((p1.x, p1.y), (100, 200));
    assert_eq!((p2.x, p2.y), (300, 400));
}

#[test]
fn test_output_does_not_depend_on_pixels() {
    let a = process_image(&rgb_image(3, 5)).unwrap();
    let zeros: ImageArray<u8> = ImageArray::zeros(ArrayShape::new(3, 5, 3)).unwrap();
    let b = process_image(&zeros).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_rejects_wrong_rank() {
    let err = ImageArray::<u8>::from_dims(&[2, 2, 2, 2], vec![0; 16]).unwrap_err();
    assert!(matches!(err, CoreError::IncompatibleDimensions(4)));
    assert!(err.to_string().contains("Incompatible numpy array dimensions"));
}

fn assert_reference_output(out: &ProcessOutput) {
    assert_eq!(out.matrix, Matrix3d::identity());
    assert_eq!(out.point1, Point2i::new(100, 200));
    assert_eq!(out.point2, Point2i::new(300, 400));
}

#[test]
fn test_accepts_empty_image() {
    for shape in [ArrayShape::new(0, 10, 3), ArrayShape::new(10, 0, 3), ArrayShape::gray(0, 0)] {
        let img: ImageArray<u8> = ImageArray::zeros(shape).unwrap();
        assert_reference_output(&process_image(&img).unwrap());
    }
}

#[test]
fn test_accepts_any_channel_count() {
    for channels in [5, 8, 64] {
        let img: ImageArray<u8> = ImageArray::zeros(ArrayShape::new(10, 10, channels)).unwrap();
        assert_reference_output(&process_image(&img).unwrap());
    }
}

#[test]
fn test_accepts_zero_channels() {
    let img: ImageArray<u8> = ImageArray::zeros(ArrayShape::new(4, 4, 0)).unwrap();
    assert_reference_output(&process_image(&img).unwrap());
}
