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

//! Geometry functions and weighting functions.
//!
//! Each maps a list of site combinations to one value per combination.  Geometry
//! functions are total; weighting functions may drop combinations.

use crate::geometry::DistanceMatrix;
use crate::indices::{Index2D, Index3D};
use crate::request::{K2Geometry, K3Geometry, Weighting};

use std::collections::BTreeMap;
use nalgebra::Vector3;

/// One value per site combination.
pub type ValueMap<K> = BTreeMap<K, f64>;

/// A combination of sites that a weighting function can be applied to.
pub trait Combination: Copy + Ord {
    /// The length fed to distance-based weighting.
    ///
    /// For a pair this is the distance between the two sites; for a triplet it is the
    /// perimeter of the triangle.
    fn weighting_length(&self, distances: &DistanceMatrix) -> f64;
}

impl Combination for Index2D {
    #[inline]
    fn weighting_length(&self, distances: &DistanceMatrix) -> f64
    { distances[self.i][self.j] }
}

impl Combination for Index3D {
    #[inline]
    fn weighting_length(&self, distances: &DistanceMatrix) -> f64 {
        let Index3D { i, j, k } = *self;
        distances[i][j] + distances[j][k] + distances[k][i]
    }
}

/// `1 / r_ij` for each pair.
///
/// Coincident sites give infinity.
pub fn inverse_distance(distances: &DistanceMatrix, indices: &[Index2D]) -> ValueMap<Index2D> {
    indices.iter()
        .map(|&index| (index, 1.0 / distances[index.i][index.j]))
        .collect()
}

/// Cosine of the angle at vertex `j` between the bonds to `i` and `k`.
pub fn cosine(
    displacements: &[Vec<Vector3<f64>>],
    distances: &DistanceMatrix,
    indices: &[Index3D],
) -> ValueMap<Index3D> {
    indices.iter()
        .map(|&index| {
            let Index3D { i, j, k } = index;
            let a = displacements[i][j];
            let b = displacements[k][j];
            (index, a.dot(&b) / (distances[i][j] * distances[k][j]))
        })
        .collect()
}

pub fn unity<K: Combination>(indices: &[K]) -> ValueMap<K>
{ indices.iter().map(|&index| (index, 1.0)).collect() }

/// `exp(-scale * length)`, omitting every combination whose weight exceeds `cutoff`.
pub fn exponential<K: Combination>(
    distances: &DistanceMatrix,
    indices: &[K],
    scale: f64,
    cutoff: f64,
) -> ValueMap<K> {
    indices.iter()
        .map(|&index| (index, f64::exp(-scale * index.weighting_length(distances))))
        .filter(|&(_, weight)| weight <= cutoff)
        .collect()
}

impl K2Geometry {
    pub fn values(self, distances: &DistanceMatrix, indices: &[Index2D]) -> ValueMap<Index2D> {
        match self {
            K2Geometry::InverseDistance => inverse_distance(distances, indices),
        }
    }
}

impl K3Geometry {
    pub fn values(
        self,
        displacements: &[Vec<Vector3<f64>>],
        distances: &DistanceMatrix,
        indices: &[Index3D],
    ) -> ValueMap<Index3D> {
        match self {
            K3Geometry::Cosine => cosine(displacements, distances, indices),
        }
    }
}

impl Weighting {
    pub fn values<K: Combination>(self, distances: &DistanceMatrix, indices: &[K]) -> ValueMap<K> {
        match self {
            Weighting::Unity => unity(indices),
            Weighting::Exponential { scale, cutoff } => {
                exponential(distances, indices, scale.into_inner(), cutoff.into_inner())
            },
        }
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::geometry::{displacement_tensor, distance_matrix};
    use crate::indices::{pair_indices, triplet_indices};

    fn setup(positions: &[[f64; 3]]) -> (Vec<Vec<Vector3<f64>>>, DistanceMatrix) {
        let positions = positions.iter().cloned().map(Vector3::from).collect::<Vec<_>>();
        let displacements = displacement_tensor(&positions);
        let distances = distance_matrix(&displacements);
        (displacements, distances)
    }

    #[test]
    fn cosine_straight_and_right_angles() {
        // 0 -- 1 -- 2 on a line, and 3 above 1
        let (displacements, distances) = setup(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
        ]);
        let values = cosine(&displacements, &distances, &[
            Index3D::new(0, 1, 2),
            Index3D::new(0, 1, 3),
            Index3D::new(1, 0, 2),
        ]);
        assert_close!(abs=1e-12, values[&Index3D::new(0, 1, 2)], -1.0);
        assert_close!(abs=1e-12, values[&Index3D::new(0, 1, 3)], 0.0);
        // sites 1 and 2 are in the same direction from 0
        assert_close!(abs=1e-12, values[&Index3D::new(1, 0, 2)], 1.0);
    }

    #[test]
    fn cosine_is_symmetric_in_endpoints() {
        let (displacements, distances) = setup(&[
            [0.1, 0.7, -0.3],
            [1.2, 0.0, 0.4],
            [-0.5, 1.1, 2.0],
        ]);
        let values = cosine(&displacements, &distances, &[Index3D::new(0, 1, 2), Index3D::new(2, 1, 0)]);
        assert_close!(values[&Index3D::new(0, 1, 2)], values[&Index3D::new(2, 1, 0)]);
    }

    #[test]
    fn inverse_distances() {
        let (_, distances) = setup(&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 4.0]]);
        let values = inverse_distance(&distances, &pair_indices(3, 3));
        assert_eq!(values.len(), 3);
        assert_close!(values[&Index2D::new(0, 1)], 0.5);
        assert_close!(values[&Index2D::new(0, 2)], 0.25);
        assert_close!(values[&Index2D::new(1, 2)], 1.0 / f64::sqrt(20.0));
    }

    #[test]
    fn zero_scale_exponential_is_unity() {
        let (_, distances) = setup(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 3.0, 0.0], [5.0, 5.0, 5.0]]);
        let pairs = pair_indices(4, 4);
        let triplets = triplet_indices(4, 4);
        assert_eq!(exponential(&distances, &pairs, 0.0, 1.0), unity(&pairs));
        assert_eq!(exponential(&distances, &triplets, 0.0, 1.0), unity(&triplets));
    }

    #[test]
    fn exponential_values_and_cutoff() {
        let (_, distances) = setup(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 2.0, 0.0]]);
        let pairs = pair_indices(3, 3);

        // nothing is filtered with a cutoff of 1
        let all = exponential(&distances, &pairs, 0.5, 1.0);
        assert_eq!(all.len(), 3);
        assert_close!(all[&Index2D::new(0, 1)], f64::exp(-0.5));
        assert_close!(all[&Index2D::new(0, 2)], f64::exp(-1.0));
        assert_close!(all[&Index2D::new(1, 2)], f64::exp(-0.5 * f64::sqrt(5.0)));

        // only weights at or below the cutoff survive
        let some = exponential(&distances, &pairs, 0.5, f64::exp(-0.9));
        assert_eq!(some.keys().cloned().collect::<Vec<_>>(), vec![Index2D::new(0, 2), Index2D::new(1, 2)]);

        // triangle perimeter
        let triangle = exponential(&distances, &[Index3D::new(0, 1, 2)], 1.0, 1.0);
        let perimeter = 1.0 + 2.0 + f64::sqrt(5.0);
        assert_close!(triangle[&Index3D::new(0, 1, 2)], f64::exp(-perimeter));
    }

    #[test]
    fn dispatch() {
        let (displacements, distances) = setup(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        let pairs = pair_indices(3, 3);
        let triplets = triplet_indices(3, 3);
        assert_eq!(K2Geometry::InverseDistance.values(&distances, &pairs), inverse_distance(&distances, &pairs));
        assert_eq!(
            K3Geometry::Cosine.values(&displacements, &distances, &triplets),
            cosine(&displacements, &distances, &triplets),
        );
        assert_eq!(Weighting::Unity.values(&distances, &triplets), unity(&triplets));
        assert_eq!(
            Weighting::exponential(2.0, 0.1).unwrap().values(&distances, &pairs),
            exponential(&distances, &pairs, 2.0, 0.1),
        );
    }
}
