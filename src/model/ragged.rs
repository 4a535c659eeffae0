//! Ragged arrays of per-ping sequences
use serde::Serialize;

/// A sequence of variable-length rows stored end to end
///
/// Each row holds the values decoded for one ping (its sectors, its
/// detection classes, its samples). Rows are kept flat in a single buffer
/// alongside the offsets at which each row starts, so the per-ping slices
/// can be recovered after any number of rows have been appended.
/// An empty row still occupies an entry in the offsets.
///
/// ```
/// # use gsf_sensor::model::RaggedArray;
/// let mut ragged = RaggedArray::new();
/// ragged.push_row(vec![1, 2, 3]);
/// ragged.push_row(vec![]);
/// ragged.push_row(vec![4]);
/// assert_eq!(ragged.len(), 3);
/// assert_eq!(ragged.row(1), Some(&[][..]));
/// assert_eq!(ragged.offsets(), &[0, 3, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaggedArray<T> {
    values: Vec<T>,
    offsets: Vec<usize>,
}

impl<T> Default for RaggedArray<T> {
    fn default() -> Self {
        RaggedArray {
            values: Vec::new(),
            offsets: vec![0],
        }
    }
}

impl<T> RaggedArray<T> {
    /// Create an empty RaggedArray
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row
    pub fn push_row<I: IntoIterator<Item = T>>(&mut self, row: I) {
        self.values.extend(row);
        self.offsets.push(self.values.len());
    }

    /// Move every row of `other` onto the end of this array
    pub fn append(&mut self, mut other: RaggedArray<T>) {
        let base = self.values.len();
        self.values.append(&mut other.values);
        self.offsets
            .extend(other.offsets.iter().skip(1).map(|offset| offset + base));
    }

    /// The number of rows
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// True if there are no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the values of row `index`
    pub fn row(&self, index: usize) -> Option<&[T]> {
        let start = *self.offsets.get(index)?;
        let end = *self.offsets.get(index + 1)?;
        self.values.get(start..end)
    }

    /// All values, row after row
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Row start offsets into [`RaggedArray::values`], followed by the total length
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Iterate over the rows
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.offsets
            .windows(2)
            .map(move |w| &self.values[w[0]..w[1]])
    }
}

impl<T> FromIterator<Vec<T>> for RaggedArray<T> {
    fn from_iter<I: IntoIterator<Item = Vec<T>>>(iter: I) -> Self {
        let mut ragged = RaggedArray::new();
        for row in iter {
            ragged.push_row(row);
        }
        ragged
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn append_rebases_offsets() {
        let mut a: RaggedArray<u8> = vec![vec![1, 2], vec![]].into_iter().collect();
        let b: RaggedArray<u8> = vec![vec![3], vec![4, 5, 6]].into_iter().collect();
        a.append(b);
        assert_eq!(a.len(), 4);
        assert_eq!(a.offsets(), &[0, 2, 2, 3, 6]);
        assert_eq!(a.row(3), Some(&[4, 5, 6][..]));
        assert_eq!(a.row(4), None);
        let rows: Vec<&[u8]> = a.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[][..], &[3][..], &[4, 5, 6][..]]);
    }

    #[test]
    fn append_empty_is_identity() {
        let mut a: RaggedArray<u8> = vec![vec![1]].into_iter().collect();
        a.append(RaggedArray::new());
        assert_eq!(a, vec![vec![1]].into_iter().collect());
    }
}
