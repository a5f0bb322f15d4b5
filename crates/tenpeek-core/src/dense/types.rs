//! Dense array type definition and basic operations
//!
//! This module defines the core `DenseND<T>` type and provides creation and
//! accessor methods. Statistics and rendering live in sibling modules.

use crate::dtype::{DType, Element};
use scirs2_core::ndarray_ext::{Array, IxDyn};
use scirs2_core::numeric::Num;

/// Dense N-dimensional array backed by scirs2_core's ndarray
///
/// # Type Parameters
///
/// * `T` - The element type (any [`Element`]: floats, integers or `bool`)
///
/// # Memory Layout
///
/// Arrays are C-contiguous (row-major); [`DenseND::to_f64_vec`] and the sample
/// taken by summaries follow that order.
///
/// # Examples
///
/// ```
/// use tenpeek_core::dense::DenseND;
///
/// let array = DenseND::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(array.shape(), &[2, 3, 4]);
/// assert_eq!(array.rank(), 3);
/// ```
#[derive(Clone)]
pub struct DenseND<T> {
    /// Underlying ndarray storage (via scirs2_core)
    pub(crate) data: Array<T, IxDyn>,
}

impl<T: Element> DenseND<T> {
    /// Create an array from an existing ndarray
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::Array;
    /// use tenpeek_core::dense::DenseND;
    ///
    /// let arr = Array::<f64, _>::zeros(vec![2, 3]);
    /// let array = DenseND::from_array(arr);
    /// assert_eq!(array.shape(), &[2, 3]);
    /// ```
    pub fn from_array(array: Array<T, IxDyn>) -> Self {
        Self { data: array }
    }

    /// Create an array from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Returns
    ///
    /// An array with the specified shape, or an error if dimensions don't match
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::dense::DenseND;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let array = DenseND::from_vec(data, &[2, 3]).unwrap();
    /// assert_eq!(array.shape(), &[2, 3]);
    ///
    /// assert!(DenseND::from_vec(vec![1, 2, 3], &[2, 2]).is_err());
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            anyhow::bail!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)?;
        Ok(Self { data: array })
    }

    /// Create a one-dimensional array from a vector
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::dense::DenseND;
    ///
    /// let array = DenseND::from_elems(vec![true, false, true]);
    /// assert_eq!(array.shape(), &[3]);
    /// ```
    pub fn from_elems(vec: Vec<T>) -> Self {
        Self {
            data: Array::from_vec(vec).into_dyn(),
        }
    }

    /// Create a zero-dimensional array holding a single value
    pub fn scalar(value: T) -> Self {
        Self {
            data: Array::from_elem(IxDyn(&[]), value),
        }
    }

    /// Create an array filled with `value`
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::dense::DenseND;
    ///
    /// let fives = DenseND::from_elem(&[2, 3], 5i32);
    /// assert_eq!(fives.len(), 6);
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), value),
        }
    }

    /// Get the rank (number of dimensions) of this array
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Get the shape of this array
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get the total number of elements
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::dense::DenseND;
    ///
    /// let array = DenseND::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(array.len(), 24);
    /// ```
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the array is empty (has zero elements)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The dtype of the elements
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Iterate over the elements in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter()
    }

    /// Copy the elements into a flat vector in row-major order
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().copied().collect()
    }

    /// Convert the elements to `f64` in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::dense::DenseND;
    ///
    /// let array = DenseND::from_vec(vec![1u8, 2, 3, 4], &[2, 2]).unwrap();
    /// assert_eq!(array.to_f64_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.data.iter().map(|x| x.to_f64()).collect()
    }
}

impl<T> DenseND<T>
where
    T: Element + Num,
{
    /// Create an array filled with zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: Array::zeros(IxDyn(shape)),
        }
    }

    /// Create an array filled with ones
    pub fn ones(shape: &[usize]) -> Self {
        Self {
            data: Array::ones(IxDyn(shape)),
        }
    }

    /// Create a one-dimensional array `0, 1, .., n - 1`
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek_core::dense::DenseND;
    ///
    /// let range = DenseND::<i64>::arange(5);
    /// assert_eq!(range.to_vec(), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn arange(n: usize) -> Self {
        let mut value = T::zero();
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(value);
            value = value + T::one();
        }
        Self::from_elems(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_shape_mismatch() {
        let err = DenseND::from_vec(vec![1.0f64; 5], &[2, 3]).unwrap_err();
        assert!(err.to_string().contains("requires 6 elements"));
    }

    #[test]
    fn test_scalar_is_rank_zero() {
        let scalar = DenseND::scalar(3.5f64);
        assert_eq!(scalar.rank(), 0);
        assert_eq!(scalar.len(), 1);
        assert_eq!(scalar.to_vec(), vec![3.5]);
    }

    #[test]
    fn test_row_major_order() {
        let array = DenseND::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        assert_eq!(array.to_vec(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(array[&[1, 0]], 4);
    }

    #[test]
    fn test_zeros_ones_dtype() {
        let zeros = DenseND::<f32>::zeros(&[2, 2]);
        assert_eq!(zeros.dtype(), DType::Float32);
        assert!(zeros.iter().all(|&x| x == 0.0));

        let ones = DenseND::<u16>::ones(&[3]);
        assert_eq!(ones.dtype(), DType::UInt16);
        assert_eq!(ones.to_vec(), vec![1, 1, 1]);
    }

    #[test]
    fn test_empty_array() {
        let empty = DenseND::<f64>::zeros(&[0, 3]);
        assert!(empty.is_empty());
        assert_eq!(empty.shape(), &[0, 3]);
    }
}
