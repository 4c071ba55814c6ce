//! Validadores del batch de composición.
//!
//! Orden del contrato: primero `details`, después objeto-ness de la secuencia
//! completa, después presencia de `name` en la secuencia completa. Recién
//! entonces el composer muta estado (fail fast: un batch rechazado no toca el
//! namespace ni los details).

use serde_json::Value;

use crate::errors::ComposeError;
use crate::model::BizObject;

/// `details` debe ser un objeto JSON.
pub(crate) fn validate_details(details: &Value) -> Result<(), ComposeError> {
    if !details.is_object() {
        return Err(ComposeError::InvalidDetails);
    }
    Ok(())
}

/// Cada elemento debe ser un objeto; cada objeto debe tener un `name` string.
/// Los dos pases recorren la secuencia completa, en ese orden.
pub(crate) fn validate_batch(objs: &[BizObject]) -> Result<(), ComposeError> {
    if !objs.iter().all(BizObject::is_object) {
        return Err(ComposeError::InvalidBundleShape);
    }
    if !objs.iter().all(|o| o.as_bundle().and_then(|b| b.name()).is_some()) {
        return Err(ComposeError::MissingName);
    }
    Ok(())
}
