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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while dispatching an MBTR request.
///
/// All of these are raised before any aggregation work begins, so an `Err` never
/// leaves partially-computed state behind in an engine's caches.
#[derive(Debug, Error)]
pub enum Error {
    /// A geometry or weighting function name that is not recognized for the requested term.
    #[error("invalid {what} function: {name:?}")]
    InvalidArgument { what: &'static str, name: String },

    #[error("weighting function '{function}' requires parameter '{parameter}'")]
    MissingParameter { function: &'static str, parameter: &'static str },

    #[error("parameter '{parameter}' must not be NaN")]
    InvalidParameter { parameter: &'static str },

    #[error("atomic number {0} has no entry in the element index map")]
    UnknownElement(u32),

    #[error("got {positions} positions but {atomic_numbers} atomic numbers")]
    LengthMismatch { positions: usize, atomic_numbers: usize },

    #[error("cell limit {cell_limit} exceeds the number of atoms ({num_atoms})")]
    CellLimit { cell_limit: usize, num_atoms: usize },

    #[error("could not read MBTR settings")]
    Yaml(#[from] serde_yaml::Error),
}
