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

//! Enumeration of the site combinations that contribute to the k2 and k3 terms.

use std::fmt;

/// A pair of indices.
///
/// Depending on context this holds either two site indices or two element indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index2D {
    pub i: usize,
    pub j: usize,
}

/// A triple of indices, where `j` is the vertex of the angle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index3D {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl Index2D {
    pub fn new(i: usize, j: usize) -> Self { Index2D { i, j } }
}

impl Index3D {
    pub fn new(i: usize, j: usize, k: usize) -> Self { Index3D { i, j, k } }
}

// "i,j" and "i,j,k"; this is also the string key format.
impl fmt::Display for Index2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { write!(f, "{},{}", self.i, self.j) }
}

impl fmt::Display for Index3D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { write!(f, "{},{},{}", self.i, self.j, self.k) }
}

// Serialized in the Display form, so that they can be map keys in any format.
#[cfg(feature = "serde-support")]
impl serde::Serialize for Index2D {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    { serializer.collect_str(self) }
}

#[cfg(feature = "serde-support")]
impl serde::Serialize for Index3D {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    { serializer.collect_str(self) }
}

/// All pairs `i < j` with at least one site in the original cell.
///
/// A pair of two images is the image of some other pair, so it is skipped.
/// Output is in lexicographic order.
pub fn pair_indices(num_atoms: usize, cell_limit: usize) -> Vec<Index2D> {
    let mut out = vec![];
    for i in 0..num_atoms {
        for j in i + 1..num_atoms {
            if i < cell_limit || j < cell_limit {
                out.push(Index2D { i, j });
            }
        }
    }
    out
}

/// All triples of distinct sites with at least one site in the original cell.
///
/// `j` is the vertex and may fall anywhere; since the angle at `j` is the same for
/// `(i, j, k)` and `(k, j, i)`, only `k > i` is produced.  Output is in lexicographic order.
///
/// This is cubic in the number of sites, and dominates the cost of a k3 computation.
pub fn triplet_indices(num_atoms: usize, cell_limit: usize) -> Vec<Index3D> {
    let mut out = vec![];
    for i in 0..num_atoms {
        for j in 0..num_atoms {
            if j == i {
                continue;
            }
            for k in i + 1..num_atoms {
                if k == j {
                    continue;
                }
                if i < cell_limit || j < cell_limit || k < cell_limit {
                    out.push(Index3D { i, j, k });
                }
            }
        }
    }
    out
}
