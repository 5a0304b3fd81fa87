/* ************************************************************************ **
** This file is part of rsp2, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
**                                                                          **
** Be aware that not all of rsp2 is provided under this permissive license, **
** and that the project as a whole is licensed under the GPL 3.0.           **
** ************************************************************************ */

use crate::errors::{Error, Result};

use std::collections::{BTreeMap, BTreeSet};

/// Assigns each chemical element a dense index, used to label aggregation buckets.
///
/// This never filters atoms; it only decides which bucket an atom's contributions land in.
/// Every atomic number that appears in a structure must have an entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementIndexMap {
    indices: BTreeMap<u32, usize>,
}

impl ElementIndexMap {
    /// Use an explicit mapping.
    pub fn from_map(indices: BTreeMap<u32, usize>) -> Self
    { ElementIndexMap { indices } }

    /// Number the distinct atomic numbers of `species` in increasing order.
    ///
    /// `[8, 1, 1, 6]` gives `{1: 0, 6: 1, 8: 2}`.
    pub fn from_species(species: impl IntoIterator<Item=u32>) -> Self {
        let distinct = species.into_iter().collect::<BTreeSet<_>>();
        let indices = distinct.into_iter().enumerate().map(|(index, z)| (z, index)).collect();
        ElementIndexMap { indices }
    }

    pub fn len(&self) -> usize { self.indices.len() }
    pub fn is_empty(&self) -> bool { self.indices.is_empty() }

    pub fn get(&self, atomic_number: u32) -> Result<usize> {
        self.indices.get(&atomic_number).cloned()
            .ok_or(Error::UnknownElement(atomic_number))
    }

    /// Element index of every site, in site order.
    ///
    /// Fails on the first atomic number without an entry.
    pub fn site_indices(&self, atomic_numbers: &[u32]) -> Result<Vec<usize>>
    { atomic_numbers.iter().map(|&z| self.get(z)).collect() }
}
