//! Errores del composer.
//!
//! El texto literal de cada mensaje es parte del contrato observable: los
//! tests lo verifican tal cual.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum ComposeError {
    #[error("details must be an [Object]")] InvalidDetails,
    #[error("all business objects must be objects")] InvalidBundleShape,
    #[error("All business objects must have [name] property")] MissingName,
    #[error("All business object functions should return a [Function]")] NonFunctionContinuation,
    #[error("unknown business object [{0}]")] UnknownBundle(String),
    #[error("unknown field [{field}] on business object [{bundle}]")] UnknownField { bundle: String, field: String },
}
