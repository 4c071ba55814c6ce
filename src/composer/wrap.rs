//! Pase de rewrap: de `Bundle` a `WrappedBundle`.

use indexmap::IndexMap;

use crate::errors::ComposeError;
use crate::model::{Bundle, BundleFn, FieldValue, WrappedBundle};

/// Construye la copia wrapeada de un bundle: el campo `name` se copia
/// verbatim, cada campo función se conserva como operación invocable y los
/// campos de datos restantes se descartan (comportamiento del contrato).
///
/// El nombre ya fue validado a nivel de batch; la re-verificación local es
/// redundante pero inocua.
pub(crate) fn rewrap(bundle: Bundle) -> Result<WrappedBundle, ComposeError> {
    let name = bundle.name().map(str::to_string).ok_or(ComposeError::MissingName)?;

    let mut ops: IndexMap<String, Box<dyn BundleFn>> = IndexMap::new();
    for (key, value) in bundle.into_fields() {
        if key == "name" {
            continue;
        }
        match value {
            FieldValue::Op(op) => {
                ops.insert(key, op);
            }
            // Campos de datos: descartados
            FieldValue::Data(_) => {}
        }
    }

    Ok(WrappedBundle::new(name, ops))
}
