use std::ops::Deref;

/// Plant type chosen for every generation unit, in unit order.
///
/// Entries are type indices into the per-type parameter arrays. Range checking happens when the
/// assignment is evaluated, not when it is built, so a search procedure can construct candidates
/// freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Assignment(Vec<usize>);

impl Assignment {
    pub fn new(types: Vec<usize>) -> Self {
        Self(types)
    }

    /// Every unit assigned to the same plant type.
    pub fn uniform(unit_count: usize, type_index: usize) -> Self {
        Self(vec![type_index; unit_count])
    }

    #[inline]
    pub fn types(&self) -> &[usize] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for Assignment {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[usize]> for Assignment {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for Assignment {
    fn from(types: Vec<usize>) -> Self {
        Self(types)
    }
}

impl FromIterator<usize> for Assignment {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
