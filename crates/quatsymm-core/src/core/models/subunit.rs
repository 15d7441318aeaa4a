use nalgebra::Point3;

/// A repeated structural unit of an oligomeric assembly.
///
/// A subunit is described by its backbone trace (one Cα position per residue), the
/// matching side-chain trace (one Cβ position per residue that has a Cβ atom, so
/// glycine-containing chains are shorter here) and the id of the sequence cluster it
/// belongs to. Subunits sharing a cluster id are considered sequence-identical and may
/// therefore be superposed position by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Subunit {
    /// Ordered Cα positions in Angstroms.
    pub calpha_trace: Vec<Point3<f64>>,
    /// Ordered Cβ positions in Angstroms.
    pub cbeta_trace: Vec<Point3<f64>>,
    /// Label shared by all subunits of identical sequence.
    pub sequence_cluster_id: i32,
}

impl Subunit {
    pub fn new(
        calpha_trace: Vec<Point3<f64>>,
        cbeta_trace: Vec<Point3<f64>>,
        sequence_cluster_id: i32,
    ) -> Self {
        Self {
            calpha_trace,
            cbeta_trace,
            sequence_cluster_id,
        }
    }

    /// Creates a subunit without side-chain coordinates.
    pub fn from_calpha_trace(calpha_trace: Vec<Point3<f64>>, sequence_cluster_id: i32) -> Self {
        Self::new(calpha_trace, Vec::new(), sequence_cluster_id)
    }

    pub fn calpha_count(&self) -> usize {
        self.calpha_trace.len()
    }

    pub fn cbeta_count(&self) -> usize {
        self.cbeta_trace.len()
    }
}

/// The ordered subunits of one structure, indexed from zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubunitSet {
    subunits: Vec<Subunit>,
}

impl SubunitSet {
    pub fn new(subunits: Vec<Subunit>) -> Self {
        Self { subunits }
    }

    pub fn len(&self) -> usize {
        self.subunits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subunits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Subunit> {
        self.subunits.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subunit> {
        self.subunits.iter()
    }

    pub fn as_slice(&self) -> &[Subunit] {
        &self.subunits
    }

    pub fn sequence_cluster_ids(&self) -> Vec<i32> {
        self.subunits
            .iter()
            .map(|s| s.sequence_cluster_id)
            .collect()
    }

    pub fn total_calpha_count(&self) -> usize {
        self.subunits.iter().map(Subunit::calpha_count).sum()
    }

    pub fn total_cbeta_count(&self) -> usize {
        self.subunits.iter().map(Subunit::cbeta_count).sum()
    }
}

impl From<Vec<Subunit>> for SubunitSet {
    fn from(subunits: Vec<Subunit>) -> Self {
        Self::new(subunits)
    }
}

impl FromIterator<Subunit> for SubunitSet {
    fn from_iter<I: IntoIterator<Item = Subunit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SubunitSet {
    type Item = &'a Subunit;
    type IntoIter = std::slice::Iter<'a, Subunit>;

    fn into_iter(self) -> Self::IntoIter {
        self.subunits.iter()
    }
}
