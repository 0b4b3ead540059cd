//! Error types for the Glance data model.

use thiserror::Error;

/// Model-boundary errors.
///
/// The merge engine itself never fails; these only occur when decoding
/// plugin-supplied wire values into model types.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Feature type code outside the closed set.
    #[error("Unknown feature type code: {0}")]
    UnknownFeatureType(u32),
}
