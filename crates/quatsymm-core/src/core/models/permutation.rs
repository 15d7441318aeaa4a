use std::fmt;
use std::ops::Index;

/// A candidate mapping of subunits onto each other.
///
/// Entry `i` is the index of the subunit that the symmetry operation carries onto
/// position `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    pub fn new(mapping: Vec<usize>) -> Self {
        Self(mapping)
    }

    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// The cyclic shift `i -> (i + shift) mod n`, as produced by a pure rotation axis.
    pub fn cyclic(n: usize, shift: usize) -> Self {
        if n == 0 {
            return Self::default();
        }
        Self((0..n).map(|i| (i + shift) % n).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn get(&self, position: usize) -> Option<usize> {
        self.0.get(position).copied()
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &j)| i == j)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

impl From<Vec<usize>> for Permutation {
    fn from(mapping: Vec<usize>) -> Self {
        Self(mapping)
    }
}

impl From<&[usize]> for Permutation {
    fn from(mapping: &[usize]) -> Self {
        Self(mapping.to_vec())
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, position: usize) -> &usize {
        &self.0[position]
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
