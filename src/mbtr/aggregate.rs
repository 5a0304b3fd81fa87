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

//! Grouping of per-combination values into buckets labeled by element combination.

use crate::functions::ValueMap;
use crate::indices::{Index2D, Index3D};

use std::collections::BTreeMap;
use std::fmt;

/// Canonical bucket of a site combination.
///
/// This is the single place where symmetry reduction of element combinations happens.
pub trait CanonicalKey: Copy + Ord + fmt::Display {
    /// Replace site indices with element indices and pick the canonical ordering.
    fn canonical_key(&self, site_elements: &[usize]) -> Self;
}

/// Canonical ordering of an element pair: smaller index first.
#[inline]
pub fn canonical_pair(a: usize, b: usize) -> Index2D {
    if b < a { Index2D { i: b, j: a } }
    else { Index2D { i: a, j: b } }
}

/// Canonical ordering of an element triple with vertex `b`.
///
/// The endpoints are swapped when the last is smaller than the first.  The vertex never
/// moves, since `(a, b, c)` and `(c, b, a)` describe the same angle while `(b, a, c)` does not.
#[inline]
pub fn canonical_triplet(a: usize, b: usize, c: usize) -> Index3D {
    if c < a { Index3D { i: c, j: b, k: a } }
    else { Index3D { i: a, j: b, k: c } }
}

impl CanonicalKey for Index2D {
    fn canonical_key(&self, site_elements: &[usize]) -> Self
    { canonical_pair(site_elements[self.i], site_elements[self.j]) }
}

impl CanonicalKey for Index3D {
    fn canonical_key(&self, site_elements: &[usize]) -> Self {
        canonical_triplet(site_elements[self.i], site_elements[self.j], site_elements[self.k])
    }
}

/// Raw geometry and weight values of one k-body term, bucketed by element combination.
///
/// For every key, `geometry_values[key]` and `weight_values[key]` have the same length, and
/// entry `n` of each came from the same site combination.  Within a bucket, values are in
/// the order the site combinations were enumerated.
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregate<K: Ord> {
    pub geometry_values: BTreeMap<K, Vec<f64>>,
    pub weight_values: BTreeMap<K, Vec<f64>>,
}

/// An `Aggregate` whose keys are rendered as comma-separated element indices, e.g. `"0,1"`.
///
/// For consumers whose maps can only have string keys.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StringKeyedAggregate {
    pub geometry_values: BTreeMap<String, Vec<f64>>,
    pub weight_values: BTreeMap<String, Vec<f64>>,
}

/// Bucket the values of every combination in `indices`.
///
/// `geometry` must have an entry for every combination.  `weights` may be missing entries
/// (filtered by the weighting function); those combinations are dropped from both output
/// maps, so that the two stay aligned.
pub fn aggregate<K: CanonicalKey>(
    indices: &[K],
    geometry: &ValueMap<K>,
    weights: &ValueMap<K>,
    site_elements: &[usize],
) -> Aggregate<K> {
    let mut out = Aggregate { geometry_values: BTreeMap::new(), weight_values: BTreeMap::new() };
    for index in indices {
        let weight = match weights.get(index) {
            Some(&weight) => weight,
            None => continue,
        };
        let key = index.canonical_key(site_elements);
        out.geometry_values.entry(key).or_insert_with(Vec::new).push(geometry[index]);
        out.weight_values.entry(key).or_insert_with(Vec::new).push(weight);
    }
    out
}

impl<K: CanonicalKey> Aggregate<K> {
    /// Number of combinations that contributed.
    pub fn num_values(&self) -> usize
    { self.geometry_values.values().map(Vec::len).sum() }

    pub fn to_string_keyed(&self) -> StringKeyedAggregate {
        let stringify = |map: &BTreeMap<K, Vec<f64>>| -> BTreeMap<String, Vec<f64>> {
            map.iter()
                .map(|(key, values)| (key.to_string(), values.clone()))
                .collect()
        };
        StringKeyedAggregate {
            geometry_values: stringify(&self.geometry_values),
            weight_values: stringify(&self.weight_values),
        }
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canonical_keys() {
        assert_eq!(canonical_pair(1, 0), Index2D::new(0, 1));
        assert_eq!(canonical_pair(0, 1), Index2D::new(0, 1));
        assert_eq!(canonical_pair(2, 2), Index2D::new(2, 2));

        assert_eq!(canonical_triplet(2, 0, 1), Index3D::new(1, 0, 2));
        assert_eq!(canonical_triplet(1, 0, 2), Index3D::new(1, 0, 2));
        // the vertex stays put even when it is the smallest
        assert_eq!(canonical_triplet(1, 2, 0), Index3D::new(0, 2, 1));
        assert_eq!(canonical_triplet(3, 1, 3), Index3D::new(3, 1, 3));
    }

    #[test]
    fn canonical_key_uses_elements() {
        let site_elements = [1, 0, 1, 2];
        assert_eq!(Index2D::new(0, 1).canonical_key(&site_elements), Index2D::new(0, 1));
        assert_eq!(Index2D::new(2, 3).canonical_key(&site_elements), Index2D::new(1, 2));
        assert_eq!(Index3D::new(0, 2, 3).canonical_key(&site_elements), Index3D::new(1, 1, 2));
        assert_eq!(Index3D::new(3, 0, 1).canonical_key(&site_elements), Index3D::new(0, 1, 2));
    }

    #[test]
    fn grouping_preserves_order() {
        let indices = vec![Index2D::new(0, 1), Index2D::new(0, 2), Index2D::new(1, 2)];
        let geometry: ValueMap<_> = vec![(indices[0], 10.0), (indices[1], 20.0), (indices[2], 30.0)].into_iter().collect();
        let weights: ValueMap<_> = vec![(indices[0], 1.0), (indices[1], 2.0), (indices[2], 3.0)].into_iter().collect();

        let out = aggregate(&indices, &geometry, &weights, &[0, 0, 0]);
        assert_eq!(out.geometry_values, vec![(Index2D::new(0, 0), vec![10.0, 20.0, 30.0])].into_iter().collect::<BTreeMap<_, _>>());
        assert_eq!(out.weight_values, vec![(Index2D::new(0, 0), vec![1.0, 2.0, 3.0])].into_iter().collect::<BTreeMap<_, _>>());
        assert_eq!(out.num_values(), 3);
    }

    #[test]
    fn filtered_weights_drop_geometry() {
        let indices = vec![Index2D::new(0, 1), Index2D::new(0, 2), Index2D::new(1, 2)];
        let geometry: ValueMap<_> = vec![(indices[0], 10.0), (indices[1], 20.0), (indices[2], 30.0)].into_iter().collect();
        // the middle combination was filtered out
        let weights: ValueMap<_> = vec![(indices[0], 1.0), (indices[2], 3.0)].into_iter().collect();

        let out = aggregate(&indices, &geometry, &weights, &[0, 1, 1]);
        assert_eq!(
            out.geometry_values,
            vec![
                (Index2D::new(0, 1), vec![10.0]),
                (Index2D::new(1, 1), vec![30.0]),
            ].into_iter().collect::<BTreeMap<_, _>>(),
        );
        assert_eq!(
            out.weight_values,
            vec![
                (Index2D::new(0, 1), vec![1.0]),
                (Index2D::new(1, 1), vec![3.0]),
            ].into_iter().collect::<BTreeMap<_, _>>(),
        );
    }

    #[test]
    fn string_keys() {
        let indices = vec![Index3D::new(0, 1, 2)];
        let geometry: ValueMap<_> = vec![(indices[0], -0.5)].into_iter().collect();
        let weights: ValueMap<_> = vec![(indices[0], 1.0)].into_iter().collect();

        let out = aggregate(&indices, &geometry, &weights, &[4, 3, 1]).to_string_keyed();
        assert_eq!(out.geometry_values, vec![("1,3,4".to_string(), vec![-0.5])].into_iter().collect::<BTreeMap<_, _>>());
        assert_eq!(out.weight_values, vec![("1,3,4".to_string(), vec![1.0])].into_iter().collect::<BTreeMap<_, _>>());
    }
}
