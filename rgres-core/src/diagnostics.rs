//! Recoverable problems found while setting up an emission model.
//!
//! Invalid categorical inputs at construction time are replaced by documented
//! defaults rather than rejected. Each substitution is logged and also kept on the
//! model as a [`Diagnostic`] so callers can report it without a logger.

use crate::FloatValue;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Diagnostic {
    /// Pre-impoundment (river) area exceeds the reservoir area. Computation proceeds.
    PreImpoundmentAreaExceedsReservoir {
        preinund_area: FloatValue,
        reservoir_area: FloatValue,
    },
    /// Unknown phosphorus method, replaced by `fallback`
    UnsupportedPhosphorusMethod {
        requested: String,
        fallback: &'static str,
    },
    /// Unknown retention coefficient method, replaced by `fallback`
    UnsupportedRetentionMethod {
        requested: String,
        fallback: &'static str,
    },
    /// Unknown N2O model, replaced by `fallback`
    UnsupportedN2OModel {
        requested: String,
        fallback: &'static str,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::PreImpoundmentAreaExceedsReservoir {
                preinund_area,
                reservoir_area,
            } => write!(
                f,
                "Pre impoundment area ({} km2) larger than the reservoir area ({} km2)",
                preinund_area, reservoir_area
            ),
            Diagnostic::UnsupportedPhosphorusMethod {
                requested,
                fallback,
            } => write!(
                f,
                "Invalid P calculation method `{}`. Using default {} method",
                requested, fallback
            ),
            Diagnostic::UnsupportedRetentionMethod {
                requested,
                fallback,
            } => write!(
                f,
                "Retention coefficient method `{}` unknown. Using the {} model",
                requested, fallback
            ),
            Diagnostic::UnsupportedN2OModel {
                requested,
                fallback,
            } => write!(
                f,
                "N2O model `{}` unknown. Initializing with default {}",
                requested, fallback
            ),
        }
    }
}

impl Diagnostic {
    /// Emit the diagnostic through the `log` facade and hand it back
    pub fn logged(self) -> Self {
        log::warn!("{}", self);
        self
    }
}
