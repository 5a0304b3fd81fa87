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

use nalgebra::Vector3;

/// Cartesian positions and atomic numbers of an already-expanded periodic system.
///
/// The first `cell_limit` sites are the atoms of the original cell; every site after
/// that is a periodic image of one of them.  Building the images is up to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomicStructure {
    positions: Vec<Vector3<f64>>,
    atomic_numbers: Vec<u32>,
    cell_limit: usize,
}

impl AtomicStructure {
    /// Construct without validation.
    ///
    /// # Panics
    ///
    /// Panics if the positions and atomic numbers have different lengths.
    pub fn new(
        positions: impl IntoIterator<Item=[f64; 3]>,
        atomic_numbers: Vec<u32>,
        cell_limit: usize,
    ) -> Self {
        let positions: Vec<_> = positions.into_iter().map(Vector3::from).collect();
        assert_eq!(positions.len(), atomic_numbers.len(), "positions and atomic numbers differ in length");
        AtomicStructure { positions, atomic_numbers, cell_limit }
    }

    /// Construct, reporting inconsistent input as an error instead of panicking.
    ///
    /// Also rejects a `cell_limit` larger than the number of atoms.
    pub fn try_new(
        positions: impl IntoIterator<Item=[f64; 3]>,
        atomic_numbers: Vec<u32>,
        cell_limit: usize,
    ) -> Result<Self> {
        let positions: Vec<_> = positions.into_iter().map(Vector3::from).collect();
        if positions.len() != atomic_numbers.len() {
            return Err(Error::LengthMismatch {
                positions: positions.len(),
                atomic_numbers: atomic_numbers.len(),
            });
        }
        if cell_limit > positions.len() {
            return Err(Error::CellLimit { cell_limit, num_atoms: positions.len() });
        }
        Ok(AtomicStructure { positions, atomic_numbers, cell_limit })
    }

    pub fn num_atoms(&self) -> usize { self.positions.len() }
    pub fn positions(&self) -> &[Vector3<f64>] { &self.positions }
    pub fn atomic_numbers(&self) -> &[u32] { &self.atomic_numbers }
    pub fn cell_limit(&self) -> usize { self.cell_limit }

    /// Is this site part of the original cell (as opposed to an image)?
    #[inline]
    pub fn is_original(&self, site: usize) -> bool { site < self.cell_limit }
}
