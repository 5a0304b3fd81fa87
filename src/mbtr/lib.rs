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

//! The two- and three-body terms of the Many-Body Tensor Representation.
//!
//! Given the sites of a structure (already expanded into a supercell large enough to
//! contain all relevant neighbors) this produces, for every combination of elements, the
//! raw lists of geometry values and weights that a descriptor would then broaden into a
//! fixed-length vector.  Broadening, binning and normalization happen elsewhere.
//!
//! ```
//! use rsp2_mbtr_core::{AtomicStructure, ElementIndexMap, Mbtr, Index2D};
//!
//! let structure = AtomicStructure::new(
//!     vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
//!     vec![1, 1, 8],
//!     3,
//! );
//! let mbtr = Mbtr::new(structure, ElementIndexMap::from_species(vec![1, 8]));
//! let k2 = mbtr.k2_aggregate("inverse_distance", "unity", &Default::default()).unwrap();
//! assert_eq!(k2.geometry_values[&Index2D::new(0, 0)], vec![1.0]);
//! ```

#[macro_use] extern crate log;
#[cfg(test)] #[macro_use] extern crate rsp2_assert_close;

mod errors;
mod structure;
mod element;
mod cache;
mod engine;

pub mod geometry;
pub mod indices;
pub mod functions;
pub mod request;
pub mod aggregate;
pub mod settings;

//---------------------------
// public reexports; API

pub use crate::errors::{Error, Result};
pub use crate::structure::AtomicStructure;
pub use crate::element::ElementIndexMap;
pub use crate::engine::{Mbtr, CacheStatus};
pub use crate::indices::{Index2D, Index3D};
pub use crate::request::{K2Request, K3Request, K2Geometry, K3Geometry, Weighting, Parameters};
pub use crate::aggregate::{Aggregate, StringKeyedAggregate};
pub use crate::settings::Settings;
