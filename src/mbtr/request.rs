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

//! Typed forms of the (geometry function, weighting function, parameters) requests.
//!
//! Names and parameters are validated here, before an engine does any work, so that a bad
//! request cannot leave anything behind in the caches.

use crate::errors::{Error, Result};

use std::collections::BTreeMap;
use ordered_float::NotNan;

/// Numeric parameters of a weighting function, by name.
pub type Parameters = BTreeMap<String, f64>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum K2Geometry {
    /// `1 / r_ij`
    InverseDistance,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum K3Geometry {
    /// Cosine of the angle at the vertex `j`.
    Cosine,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Weighting {
    Unity,
    /// `exp(-scale * length)`, keeping only values `<= cutoff`.
    ///
    /// The length is the bond length of a pair, or the perimeter of a triangle.
    Exponential { scale: NotNan<f64>, cutoff: NotNan<f64> },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct K2Request {
    pub geometry: K2Geometry,
    pub weighting: Weighting,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct K3Request {
    pub geometry: K3Geometry,
    pub weighting: Weighting,
}

impl K2Geometry {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "inverse_distance" => Ok(K2Geometry::InverseDistance),
            _ => Err(invalid("k2 geometry", name)),
        }
    }
}

impl K3Geometry {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "cosine" => Ok(K3Geometry::Cosine),
            _ => Err(invalid("k3 geometry", name)),
        }
    }
}

impl Weighting {
    pub fn exponential(scale: f64, cutoff: f64) -> Result<Self> {
        Ok(Weighting::Exponential {
            scale: not_nan("scale", scale)?,
            cutoff: not_nan("cutoff", cutoff)?,
        })
    }

    /// Parameters that are not used by the named function are ignored.
    pub fn from_name(name: &str, parameters: &Parameters) -> Result<Self> {
        match name {
            "unity" => Ok(Weighting::Unity),
            "exponential" => {
                let get = |parameter: &'static str| {
                    parameters.get(parameter).cloned()
                        .ok_or(Error::MissingParameter { function: "exponential", parameter })
                };
                Weighting::exponential(get("scale")?, get("cutoff")?)
            },
            _ => Err(invalid("weighting", name)),
        }
    }
}

impl K2Request {
    pub fn parse(geometry: &str, weighting: &str, parameters: &Parameters) -> Result<Self> {
        Ok(K2Request {
            geometry: K2Geometry::from_name(geometry)?,
            weighting: Weighting::from_name(weighting, parameters)?,
        })
    }
}

impl K3Request {
    pub fn parse(geometry: &str, weighting: &str, parameters: &Parameters) -> Result<Self> {
        Ok(K3Request {
            geometry: K3Geometry::from_name(geometry)?,
            weighting: Weighting::from_name(weighting, parameters)?,
        })
    }
}

fn invalid(what: &'static str, name: &str) -> Error
{ Error::InvalidArgument { what, name: name.to_string() } }

fn not_nan(parameter: &'static str, value: f64) -> Result<NotNan<f64>>
{ NotNan::new(value).map_err(|_| Error::InvalidParameter { parameter }) }
