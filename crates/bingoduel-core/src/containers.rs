//! Fixed-size containers indexed through [`Index25Semantics`].

use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use crate::{
    CELL_COUNT,
    index::{Index25, Index25Semantics},
};

/// A 25-element array addressed by semantic values.
///
/// With [`CellPositionSemantics`](crate::index::CellPositionSemantics) this is
/// a per-cell table indexed by [`CellPosition`](crate::CellPosition).
///
/// # Examples
///
/// ```
/// use bingoduel_core::{CellPosition, containers::Array25, index::CellPositionSemantics};
///
/// let mut hits = Array25::<u8, CellPositionSemantics>::from_array([0; 25]);
/// hits[CellPosition::new(1, 1)] += 1;
/// assert_eq!(hits[CellPosition::new(1, 1)], 1);
/// assert_eq!(hits.as_array()[6], 1);
/// ```
pub struct Array25<T, S> {
    array: [T; CELL_COUNT],
    _semantics: PhantomData<fn() -> S>,
}

impl<T, S> Array25<T, S> {
    /// Wraps an array whose elements are in index order.
    #[must_use]
    pub const fn from_array(array: [T; CELL_COUNT]) -> Self {
        Self {
            array,
            _semantics: PhantomData,
        }
    }

    /// Returns the underlying array in index order.
    #[must_use]
    pub const fn as_array(&self) -> &[T; CELL_COUNT] {
        &self.array
    }

    /// Returns an iterator over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.array.iter()
    }
}

impl<T, S> Array25<T, S>
where
    S: Index25Semantics,
{
    /// Returns an iterator over `(value, element)` pairs in index order.
    pub fn entries(&self) -> impl Iterator<Item = (S::Value, &T)> {
        Index25::all()
            .zip(&self.array)
            .map(|(index, item)| (S::from_index(index), item))
    }

    /// Builds an array by evaluating `f` for every semantic value in index order.
    #[must_use]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(S::Value) -> T,
    {
        Self::from_array(std::array::from_fn(|i| {
            #[expect(clippy::cast_possible_truncation)]
            let index = Index25::new(i as u8);
            f(S::from_index(index))
        }))
    }
}

impl<T, S> Index<S::Value> for Array25<T, S>
where
    S: Index25Semantics,
{
    type Output = T;

    #[inline]
    fn index(&self, value: S::Value) -> &Self::Output {
        &self.array[usize::from(S::to_index(value).index())]
    }
}

impl<T, S> IndexMut<S::Value> for Array25<T, S>
where
    S: Index25Semantics,
{
    #[inline]
    fn index_mut(&mut self, value: S::Value) -> &mut Self::Output {
        &mut self.array[usize::from(S::to_index(value).index())]
    }
}

impl<T: Clone, S> Clone for Array25<T, S> {
    fn clone(&self) -> Self {
        Self::from_array(self.array.clone())
    }
}

impl<T: Copy, S> Copy for Array25<T, S> {}

impl<T: PartialEq, S> PartialEq for Array25<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.array == other.array
    }
}

impl<T: Eq, S> Eq for Array25<T, S> {}

impl<T: Hash, S> Hash for Array25<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.array.hash(state);
    }
}

impl<T: fmt::Debug, S> fmt::Debug for Array25<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.array).finish()
    }
}
