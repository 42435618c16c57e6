use cv_core::{ImageArray, Matrix3d};
use cv_imgproc::ProcessOutput;
use numpy::{PyArray2, PyReadonlyArrayDyn, PyUntypedArrayMethods};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

type PyProcessOutput<'py> = (Bound<'py, PyArray2<f64>>, (i32, i32), (i32, i32));

fn to_image_array(array: PyReadonlyArrayDyn<'_, u8>) -> PyResult<ImageArray<u8>> {
    let dims = array.shape().to_vec();
    // Logical (C-order) iteration, so strided views arrive as HWC.
    let data: Vec<u8> = array.as_array().iter().copied().collect();
    ImageArray::from_dims(&dims, data)
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

/// Take uint8 arrays as they are. Anything else goes through
/// `numpy.asarray(obj).astype("uint8")`, so numpy's own cast rules apply to
/// every numeric dtype and to nested sequences.
fn extract_image(obj: &Bound<'_, PyAny>) -> PyResult<ImageArray<u8>> {
    if let Ok(array) = obj.extract::<PyReadonlyArrayDyn<'_, u8>>() {
        return to_image_array(array);
    }

    let np = obj.py().import_bound("numpy")?;
    let cast = np
        .call_method1("asarray", (obj,))
        .and_then(|array| array.call_method1("astype", ("uint8",)))
        .map_err(|e| {
            PyErr::new::<PyTypeError, _>(format!(
                "process_image expects a numeric array: {e}"
            ))
        })?;
    to_image_array(cast.extract::<PyReadonlyArrayDyn<'_, u8>>()?)
}

fn matrix_rows(m: &Matrix3d) -> Vec<Vec<f64>> {
    m.row_iter().map(|row| row.iter().copied().collect()).collect()
}

fn to_python<'py>(py: Python<'py>, out: ProcessOutput) -> PyResult<PyProcessOutput<'py>> {
    let (matrix, point1, point2) = out.into_tuple();
    let matrix = PyArray2::from_vec2_bound(py, &matrix_rows(&matrix))
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
    Ok((matrix, (point1.x, point1.y), (point2.x, point2.y)))
}

/// A function to process an image.
///
/// Returns `(matrix, point1, point2)` where `matrix` is a 3x3 float64 array
/// and both points are `(x, y)` integer tuples.
#[pyfunction]
#[pyo3(name = "process_image")]
fn py_process_image<'py>(
    py: Python<'py>,
    image: &Bound<'py, PyAny>,
) -> PyResult<PyProcessOutput<'py>> {
    let image = extract_image(image)?;
    let out = cv_imgproc::process_image(&image)
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
    to_python(py, out)
}

#[pymodule]
fn cv_bridge(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_process_image, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use numpy::{PyArray3, PyArrayMethods};

    fn with_numpy<F>(f: F)
    where
        F: for<'py> FnOnce(Python<'py>, Bound<'py, PyModule>),
    {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let np = py.import_bound("numpy").unwrap();
            f(py, np);
        });
    }

    fn assert_reference_output(out: PyProcessOutput<'_>) {
        let (matrix, point1, point2) = out;
        assert_eq!(matrix.shape(), &[3, 3]);
        assert_eq!(
            matrix.readonly().as_slice().unwrap(),
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
        assert_eq!(point1, (100, 200));
        assert_eq!(point2, (300, 400));
    }

    #[test]
    fn test_matrix_rows_are_row_major() {
        let m = Matrix3d::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(
            matrix_rows(&m),
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]]
        );
    }

    #[test]
    fn test_uint8_array() {
        with_numpy(|py, _np| {
            let array = PyArray3::<u8>::zeros_bound(py, [10, 10, 3], false);
            assert_reference_output(py_process_image(py, array.as_any()).unwrap());

            let image = extract_image(array.as_any()).unwrap();
            assert_eq!(image.shape().dims(), vec![10, 10, 3]);
        });
    }

    #[test]
    fn test_float64_array_is_cast() {
        with_numpy(|py, np| {
            let array = np.call_method1("full", ((2, 3, 3), 3.7)).unwrap();
            let image = extract_image(&array).unwrap();
            assert!(image.as_slice().iter().all(|&v| v == 3));

            let random = np
                .getattr("random")
                .and_then(|r| r.call_method1("rand", (10, 10, 3)))
                .unwrap();
            assert_reference_output(py_process_image(py, &random).unwrap());
        });
    }

    #[test]
    fn test_int64_array_is_cast() {
        with_numpy(|py, np| {
            let array = np
                .call_method1("arange", (300i64,))
                .and_then(|a| a.call_method1("reshape", ((10, 10, 3),)))
                .unwrap();
            let image = extract_image(&array).unwrap();
            assert_eq!(image.as_slice()[..4], [0, 1, 2, 3]);
            // numpy wraps out-of-range integers modulo 256
            assert_eq!(image.as_slice()[257], 1);

            assert_reference_output(py_process_image(py, &array).unwrap());
        });
    }

    #[test]
    fn test_nested_list_is_accepted() {
        with_numpy(|py, _np| {
            let list = py.eval_bound("[[1, 2], [3, 4]]", None, None).unwrap();
            let image = extract_image(&list).unwrap();
            assert_eq!(image.shape().dims(), vec![2, 2]);
            assert_eq!(image.as_slice(), &[1, 2, 3, 4]);
        });
    }

    #[test]
    fn test_non_numeric_object_is_type_error() {
        with_numpy(|py, _np| {
            let obj = py.eval_bound("object()", None, None).unwrap();
            let err = py_process_image(py, &obj).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));
        });
    }

    #[test]
    fn test_wrong_rank_is_value_error() {
        with_numpy(|py, np| {
            let array = np.call_method1("zeros", ((2, 2, 2, 2),)).unwrap();
            let err = py_process_image(py, &array).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
            assert!(err.to_string().contains("Incompatible numpy array dimensions"));
        });
    }
}
