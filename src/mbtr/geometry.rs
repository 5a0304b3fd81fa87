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

//! Pairwise displacements and distances between all sites.

use nalgebra::Vector3;

/// `tensor[i][j]` is the vector from site `i` to site `j`.
///
/// Antisymmetric, with a zero diagonal.
pub type DisplacementTensor = Vec<Vec<Vector3<f64>>>;

/// Symmetric matrix of distances, with a zero diagonal.
pub type DistanceMatrix = Vec<Vec<f64>>;

pub fn displacement_tensor(positions: &[Vector3<f64>]) -> DisplacementTensor {
    let n = positions.len();
    let mut tensor = vec![vec![Vector3::zeros(); n]; n];

    // only the upper triangle is computed; the rest follows by antisymmetry
    for i in 0..n {
        for j in i + 1..n {
            let diff = positions[j] - positions[i];
            tensor[i][j] = diff;
            tensor[j][i] = -diff;
        }
    }
    tensor
}

pub fn distance_matrix(tensor: &[Vec<Vector3<f64>>]) -> DistanceMatrix {
    let n = tensor.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i + 1..n {
            let norm = tensor[i][j].norm();
            matrix[i][j] = norm;
            matrix[j][i] = norm;
        }
    }
    matrix
}

/// Elementwise reciprocal of the off-diagonal distances.
///
/// The diagonal is left at zero rather than infinity.  Coincident sites produce infinite
/// entries; this is not checked.
pub fn inverse_distance_matrix(distances: &[Vec<f64>]) -> DistanceMatrix {
    let n = distances.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i + 1..n {
            let inverse = 1.0 / distances[i][j];
            matrix[i][j] = inverse;
            matrix[j][i] = inverse;
        }
    }
    matrix
}
