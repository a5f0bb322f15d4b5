//! # DenseND - Trait Implementations
//!
//! - `Index` / `IndexMut` by multi-index
//! - `Debug`
//! - `Display` (plain rendering with default print options)

use super::types::DenseND;
use crate::dtype::Element;
use crate::print_options::PrintOptions;
use scirs2_core::ndarray_ext::IxDyn;
use std::fmt;

impl<T> std::ops::Index<&[usize]> for DenseND<T> {
    type Output = T;
    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[IxDyn(index)]
    }
}

impl<T> std::ops::IndexMut<&[usize]> for DenseND<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        &mut self.data[IxDyn(index)]
    }
}

impl<T: Element> fmt::Debug for DenseND<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseND")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Element> fmt::Display for DenseND<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&PrintOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use crate::DenseND;

    #[test]
    fn test_index_mut() {
        let mut array = DenseND::<f64>::zeros(&[2, 2]);
        array[&[0, 1]] = 42.0;
        assert_eq!(array[&[0, 1]], 42.0);
    }

    #[test]
    fn test_display_uses_defaults() {
        let array = DenseND::from_vec(vec![0.5f32, 1.0], &[2]).unwrap();
        assert_eq!(array.to_string(), "[0.50 1.00]");
    }

    #[test]
    fn test_debug_mentions_dtype() {
        let array = DenseND::from_vec(vec![1u8, 2], &[2]).unwrap();
        let text = format!("{:?}", array);
        assert!(text.contains("DenseND"));
        assert!(text.contains("UInt8"));
    }
}
