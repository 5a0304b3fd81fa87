//! Umbrella crate for the MBTR workspace.
//!
//! The computation lives in `rsp2-mbtr-core`, reexported here in full.  This crate adds the
//! process-level setup that a library should not do on its own, namely logging.

pub use rsp2_mbtr_core::*;

pub mod logging;
