//! Core traits for preprocessing inputs.
//!
//! [`FlatSource`] is the seam between the scaler and whatever container holds
//! the data. The scaler never looks at shape during fit: it only needs to
//! visit every scalar element once, so any dense array, slice or vector can be
//! pooled together with any other.

use ndarray::{ArrayBase, Data, Dimension};
use num_traits::Float;

/// A collection whose scalar elements can be visited as one flat sequence.
///
/// Implemented for `ndarray` arrays of any storage and dimension, for slices,
/// vectors and fixed-size arrays, for ragged row collections wrapped in
/// [`Rows`], and for references to any of these.
///
/// # Example
/// ```
/// use flatscaler_rs::preprocessing::FlatSource;
/// use ndarray::array;
///
/// let grid = array![[1.0, 2.0], [3.0, 4.0]];
/// let total: f64 = grid.values().sum();
/// assert_eq!(total, 10.0);
/// assert_eq!(FlatSource::<f64>::len(&grid), 4);
/// ```
pub trait FlatSource<F: Float> {
    /// Iterate over every scalar element, in storage-independent logical order.
    fn values(&self) -> impl Iterator<Item = F> + '_;

    /// Number of scalar elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F, S, D> FlatSource<F> for ArrayBase<S, D>
where
    F: Float + 'static,
    S: Data<Elem = F>,
    D: Dimension,
{
    fn values(&self) -> impl Iterator<Item = F> + '_ {
        self.iter().copied()
    }

    fn len(&self) -> usize {
        ArrayBase::len(self)
    }
}

impl<F: Float> FlatSource<F> for [F] {
    fn values(&self) -> impl Iterator<Item = F> + '_ {
        self.iter().copied()
    }

    fn len(&self) -> usize {
        <[F]>::len(self)
    }
}

impl<F: Float> FlatSource<F> for Vec<F> {
    fn values(&self) -> impl Iterator<Item = F> + '_ {
        self.iter().copied()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<F: Float, const N: usize> FlatSource<F> for [F; N] {
    fn values(&self) -> impl Iterator<Item = F> + '_ {
        self.iter().copied()
    }

    fn len(&self) -> usize {
        N
    }
}

/// A ragged collection of rows pooled as one source.
///
/// Lets nested data such as `Vec<Vec<f64>>` count as a single fit argument, so
/// error positions refer to the argument rather than to one of its rows.
///
/// ```
/// use flatscaler_rs::preprocessing::{FlatSource, Rows};
///
/// let ragged = vec![vec![1.0, 2.0], vec![3.0]];
/// let rows = Rows::new(&ragged);
/// assert_eq!(FlatSource::<f64>::len(&rows), 3);
/// assert_eq!(rows.values().collect::<Vec<f64>>(), vec![1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rows<'a, V>(pub &'a [V]);

impl<'a, V> Rows<'a, V> {
    pub fn new(rows: &'a [V]) -> Self {
        Rows(rows)
    }
}

impl<'a, F, V> FlatSource<F> for Rows<'a, V>
where
    F: Float + 'static,
    V: AsRef<[F]>,
{
    fn values(&self) -> impl Iterator<Item = F> + '_ {
        self.0.iter().flat_map(|row| row.as_ref().iter().copied())
    }

    fn len(&self) -> usize {
        self.0.iter().map(|row| row.as_ref().len()).sum()
    }
}

impl<F, T> FlatSource<F> for &T
where
    F: Float,
    T: FlatSource<F> + ?Sized,
{
    fn values(&self) -> impl Iterator<Item = F> + '_ {
        (**self).values()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
