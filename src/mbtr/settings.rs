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

//! YAML settings describing which k2 and k3 terms to compute.
//!
//! ```yaml
//! k2:
//!   geometry: inverse_distance
//!   weighting:
//!     function: exponential
//!     scale: 0.5
//!     cutoff: 1.0e-3
//! k3:
//!   geometry: cosine
//!   weighting:
//!     function: unity
//! ```
//!
//! Function names are the same ones accepted by the string-based methods of `Mbtr`, and
//! are validated by the same code.

use crate::errors::Result;
use crate::request::{K2Request, K3Request, Parameters};

use serde::{Deserialize, Serialize};

/// Root settings object.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// The two-body term.  Omit to skip it.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k2: Option<Term>,

    /// The three-body term.  Omit to skip it.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k3: Option<Term>,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct Term {
    /// `inverse_distance` for k2, `cosine` for k3.
    pub geometry: String,
    pub weighting: WeightingSettings,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct WeightingSettings {
    /// `unity` or `exponential`.
    pub function: String,

    /// Required for `exponential`.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,

    /// Required for `exponential`.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
}

impl Settings {
    pub fn from_yaml_str(s: &str) -> Result<Self>
    { Ok(serde_yaml::from_str(s)?) }

    pub fn from_yaml_reader(r: impl std::io::Read) -> Result<Self>
    { Ok(serde_yaml::from_reader(r)?) }

    /// Validate the k2 section, if present.
    pub fn k2_request(&self) -> Result<Option<K2Request>> {
        self.k2.as_ref().map(|term| {
            K2Request::parse(&term.geometry, &term.weighting.function, &term.weighting.parameters())
        }).transpose()
    }

    /// Validate the k3 section, if present.
    pub fn k3_request(&self) -> Result<Option<K3Request>> {
        self.k3.as_ref().map(|term| {
            K3Request::parse(&term.geometry, &term.weighting.function, &term.weighting.parameters())
        }).transpose()
    }
}

impl WeightingSettings {
    /// The parameters in the form taken by the string-based API.
    pub fn parameters(&self) -> Parameters {
        let mut out = Parameters::new();
        if let Some(scale) = self.scale {
            out.insert("scale".to_string(), scale);
        }
        if let Some(cutoff) = self.cutoff {
            out.insert("cutoff".to_string(), cutoff);
        }
        out
    }
}
