use crate::{CoreError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    U8,
    F64,
}

/// Scalar types an [`ImageArray`] can hold.
pub trait Element: Copy + Default + fmt::Debug + PartialEq + 'static {
    const DTYPE: DataType;

    /// Forced conversion to `u8`: truncates toward zero, saturates at the
    /// type bounds and maps NaN to 0.
    fn to_u8(self) -> u8;
}

impl Element for u8 {
    const DTYPE: DataType = DataType::U8;

    fn to_u8(self) -> u8 {
        self
    }
}

impl Element for f64 {
    const DTYPE: DataType = DataType::F64;

    fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Shape of an image array: `(rows, cols)` or `(rows, cols, channels)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayShape {
    pub rows: usize,
    pub cols: usize,
    pub channels: usize,
    ndim: usize,
}

impl ArrayShape {
    pub fn new(rows: usize, cols: usize, channels: usize) -> Self {
        Self {
            rows,
            cols,
            channels,
            ndim: 3,
        }
    }

    pub fn gray(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            channels: 1,
            ndim: 2,
        }
    }

    /// Build a shape from numpy-style dimensions. Only 2-D and 3-D arrays
    /// describe an image.
    pub fn from_dims(dims: &[usize]) -> Result<Self> {
        match *dims {
            [rows, cols] => Ok(Self::gray(rows, cols)),
            [rows, cols, channels] => Ok(Self::new(rows, cols, channels)),
            _ => Err(CoreError::IncompatibleDimensions(dims.len())),
        }
    }

    pub fn ndim(&self) -> usize {
        self.ndim
    }

    pub fn dims(&self) -> Vec<usize> {
        if self.ndim == 2 {
            vec![self.rows, self.cols]
        } else {
            vec![self.rows, self.cols, self.channels]
        }
    }

    pub fn len(&self) -> usize {
        self.rows
            .saturating_mul(self.cols)
            .saturating_mul(self.channels)
    }

    pub fn checked_len(&self) -> Option<usize> {
        self.rows
            .checked_mul(self.cols)
            .and_then(|partial| partial.checked_mul(self.channels))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for ArrayShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ndim == 2 {
            write!(f, "({}, {})", self.rows, self.cols)
        } else {
            write!(f, "({}, {}, {})", self.rows, self.cols, self.channels)
        }
    }
}

/// Dense image array.
///
/// **Layout Convention:** HWC (row-major, channel fastest), which is the
/// layout numpy uses for `(rows, cols, channels)` images. The element at
/// `(r, c, ch)` lives at `r * (cols * channels) + c * channels + ch`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageArray<T: Element> {
    data: Vec<T>,
    shape: ArrayShape,
}

impl<T: Element> ImageArray<T> {
    pub fn from_vec(data: Vec<T>, shape: ArrayShape) -> Result<Self> {
        let expected = shape.checked_len().ok_or_else(|| {
            CoreError::DimensionMismatch(format!("shape {shape} overflows usize"))
        })?;
        if data.len() != expected {
            return Err(CoreError::DimensionMismatch(format!(
                "shape {shape} needs {expected} elements, got {}",
                data.len()
            )));
        }
        Ok(Self { data, shape })
    }

    pub fn from_dims(dims: &[usize], data: Vec<T>) -> Result<Self> {
        Self::from_vec(data, ArrayShape::from_dims(dims)?)
    }

    /// Fill an array by calling `f(row, col, channel)` in memory order.
    pub fn from_fn<F>(shape: ArrayShape, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize, usize) -> T,
    {
        let len = shape.checked_len().ok_or_else(|| {
            CoreError::DimensionMismatch(format!("shape {shape} overflows usize"))
        })?;
        let mut data = Vec::with_capacity(len);
        for r in 0..shape.rows {
            for c in 0..shape.cols {
                for ch in 0..shape.channels {
                    data.push(f(r, c, ch));
                }
            }
        }
        Ok(Self { data, shape })
    }

    pub fn zeros(shape: ArrayShape) -> Result<Self> {
        Self::from_fn(shape, |_, _, _| T::default())
    }

    pub fn shape(&self) -> ArrayShape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn map<U: Element, F: FnMut(T) -> U>(&self, f: F) -> ImageArray<U> {
        ImageArray {
            data: self.data.iter().copied().map(f).collect(),
            shape: self.shape,
        }
    }

    pub fn to_u8(&self) -> ImageArray<u8> {
        self.map(T::to_u8)
    }
}

impl<T: Element> fmt::Display for ImageArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageArray({}, {:?})", self.shape, T::DTYPE)
    }
}
