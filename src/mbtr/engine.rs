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

use crate::errors::Result;
use crate::aggregate::{aggregate, Aggregate, StringKeyedAggregate};
use crate::cache::RequestCache;
use crate::element::ElementIndexMap;
use crate::geometry::{self, DisplacementTensor, DistanceMatrix};
use crate::indices::{self, Index2D, Index3D};
use crate::request::{K2Request, K3Request, Parameters};
use crate::structure::AtomicStructure;

use std::cell::OnceCell;
use std::rc::Rc;

/// Computes the k2 and k3 terms of the MBTR for a single structure.
///
/// Everything expensive is computed lazily and kept for the lifetime of the engine:
///
/// * the displacement tensor,
/// * the pair and triplet index lists,
/// * one aggregate per distinct k2 or k3 request.
///
/// The structure cannot be modified after construction, so nothing is ever invalidated.
///
/// The lazy caches use interior mutability without locking, so `Mbtr` is not `Sync`.
/// To share one across threads, wrap it in a `Mutex`.
///
/// # Degenerate input
///
/// Two sites at the same position produce infinite inverse distances and NaN cosines.
/// This is not checked.
#[derive(Debug)]
pub struct Mbtr {
    structure: AtomicStructure,
    elements: ElementIndexMap,
    displacements: OnceCell<DisplacementTensor>,
    pair_indices: OnceCell<Vec<Index2D>>,
    triplet_indices: OnceCell<Vec<Index3D>>,
    k2_cache: RequestCache<K2Request, Aggregate<Index2D>>,
    k3_cache: RequestCache<K3Request, Aggregate<Index3D>>,
}

/// Which lazily-computed data an `Mbtr` currently holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CacheStatus {
    pub displacements: bool,
    pub pair_indices: bool,
    pub triplet_indices: bool,
    pub k2_requests: usize,
    pub k3_requests: usize,
}

impl Mbtr {
    pub fn new(structure: AtomicStructure, elements: ElementIndexMap) -> Self {
        Mbtr {
            structure,
            elements,
            displacements: OnceCell::new(),
            pair_indices: OnceCell::new(),
            triplet_indices: OnceCell::new(),
            k2_cache: RequestCache::default(),
            k3_cache: RequestCache::default(),
        }
    }

    pub fn structure(&self) -> &AtomicStructure { &self.structure }
    pub fn elements(&self) -> &ElementIndexMap { &self.elements }

    pub fn cache_status(&self) -> CacheStatus {
        CacheStatus {
            displacements: self.displacements.get().is_some(),
            pair_indices: self.pair_indices.get().is_some(),
            triplet_indices: self.triplet_indices.get().is_some(),
            k2_requests: self.k2_cache.len(),
            k3_requests: self.k3_cache.len(),
        }
    }

    /// Compute the displacement tensor and both index lists now.
    ///
    /// Afterwards, only aggregates remain to be computed lazily.
    pub fn materialize(&self) {
        let _ = self.displacement_tensor();
        let _ = self.pair_indices();
        let _ = self.triplet_indices();
    }
}

//--------------------------------------------------------
// geometry

impl Mbtr {
    pub fn displacement_tensor(&self) -> &DisplacementTensor {
        self.displacements.get_or_init(|| {
            debug!("computing displacement tensor for {} sites", self.structure.num_atoms());
            geometry::displacement_tensor(self.structure.positions())
        })
    }

    /// Distances between all sites.
    ///
    /// This is recomputed on every call (cheaply, from the cached displacements).
    pub fn distance_matrix(&self) -> DistanceMatrix
    { geometry::distance_matrix(self.displacement_tensor()) }

    pub fn inverse_distance_matrix(&self) -> DistanceMatrix
    { geometry::inverse_distance_matrix(&self.distance_matrix()) }
}

//--------------------------------------------------------
// index lists

impl Mbtr {
    pub fn pair_indices(&self) -> &[Index2D] {
        self.pair_indices.get_or_init(|| {
            let out = indices::pair_indices(self.structure.num_atoms(), self.structure.cell_limit());
            debug!("enumerated {} k2 site pairs", out.len());
            out
        })
    }

    pub fn triplet_indices(&self) -> &[Index3D] {
        self.triplet_indices.get_or_init(|| {
            let out = indices::triplet_indices(self.structure.num_atoms(), self.structure.cell_limit());
            debug!("enumerated {} k3 site triplets", out.len());
            out
        })
    }
}

//--------------------------------------------------------
// aggregates

impl Mbtr {
    /// k2 values by element pair, for named geometry and weighting functions.
    ///
    /// The only geometry function is `"inverse_distance"`.  Weighting functions are `"unity"`
    /// and `"exponential"` (which requires `"scale"` and `"cutoff"` parameters).
    pub fn k2_aggregate(
        &self,
        geometry: &str,
        weighting: &str,
        parameters: &Parameters,
    ) -> Result<Rc<Aggregate<Index2D>>> {
        let request = K2Request::parse(geometry, weighting, parameters)?;
        self.k2_aggregate_with(&request)
    }

    /// k3 values by element triple, for named geometry and weighting functions.
    ///
    /// The only geometry function is `"cosine"`.  Weighting functions are as for k2, with
    /// the triangle perimeter in place of the pair distance.
    pub fn k3_aggregate(
        &self,
        geometry: &str,
        weighting: &str,
        parameters: &Parameters,
    ) -> Result<Rc<Aggregate<Index3D>>> {
        let request = K3Request::parse(geometry, weighting, parameters)?;
        self.k3_aggregate_with(&request)
    }

    pub fn k2_aggregate_string_keyed(
        &self,
        geometry: &str,
        weighting: &str,
        parameters: &Parameters,
    ) -> Result<StringKeyedAggregate>
    { self.k2_aggregate(geometry, weighting, parameters).map(|x| x.to_string_keyed()) }

    pub fn k3_aggregate_string_keyed(
        &self,
        geometry: &str,
        weighting: &str,
        parameters: &Parameters,
    ) -> Result<StringKeyedAggregate>
    { self.k3_aggregate(geometry, weighting, parameters).map(|x| x.to_string_keyed()) }

    pub fn k2_aggregate_with(&self, request: &K2Request) -> Result<Rc<Aggregate<Index2D>>> {
        self.k2_cache.get_or_try_insert_with(request, || {
            let site_elements = self.elements.site_indices(self.structure.atomic_numbers())?;

            let indices = self.pair_indices();
            let distances = self.distance_matrix();
            let geometry = request.geometry.values(&distances, indices);
            let weights = request.weighting.values(&distances, indices);
            warn_if_all_filtered("k2", indices.len(), weights.len());

            Ok(aggregate(indices, &geometry, &weights, &site_elements))
        })
    }

    pub fn k3_aggregate_with(&self, request: &K3Request) -> Result<Rc<Aggregate<Index3D>>> {
        self.k3_cache.get_or_try_insert_with(request, || {
            let site_elements = self.elements.site_indices(self.structure.atomic_numbers())?;

            let indices = self.triplet_indices();
            let distances = self.distance_matrix();
            let geometry = request.geometry.values(self.displacement_tensor(), &distances, indices);
            let weights = request.weighting.values(&distances, indices);
            warn_if_all_filtered("k3", indices.len(), weights.len());

            Ok(aggregate(indices, &geometry, &weights, &site_elements))
        })
    }
}

fn warn_if_all_filtered(term: &str, num_indices: usize, num_weights: usize) {
    if num_indices > 0 && num_weights == 0 {
        warn!("weighting discarded all {} {} combinations; check the cutoff", num_indices, term);
    }
}
