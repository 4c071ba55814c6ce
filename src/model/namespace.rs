//! Namespace agregado y bundles wrapeados.
//!
//! El namespace mapea nombre de bundle a su copia wrapeada, en orden de
//! inserción. Acumula entradas a través de llamadas sucesivas a `compose`; un
//! nombre repetido sobreescribe su entrada anterior. La invocación de una
//! función wrapeada resuelve el contexto contra el estado *actual*, no contra
//! el estado al momento del wrap.

use indexmap::IndexMap;
use serde_json::{json, Value};
use std::fmt;

use super::bundle::{BundleFn, Stage};
use super::context::InjectionCtx;
use crate::constants::COMPOSER_VERSION;
use crate::errors::ComposeError;
use crate::hashing::hash_value;

/// Copia wrapeada de un bundle: conserva `name` verbatim y sus operaciones;
/// los campos de datos fueron descartados por el rewrap.
pub struct WrappedBundle {
    name: String,
    ops: IndexMap<String, Box<dyn BundleFn>>,
}

impl WrappedBundle {
    pub(crate) fn new(name: String, ops: IndexMap<String, Box<dyn BundleFn>>) -> Self {
        Self { name, ops }
    }

    /// Nombre copiado verbatim del bundle original.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    pub fn has_op(&self, field: &str) -> bool {
        self.ops.contains_key(field)
    }

    /// Nombres de operaciones en orden de registro.
    pub fn op_names(&self) -> Vec<&str> {
        self.ops.keys().map(String::as_str).collect()
    }

    pub(crate) fn op(&self, field: &str) -> Option<&dyn BundleFn> {
        self.ops.get(field).map(Box::as_ref)
    }
}

impl fmt::Debug for WrappedBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedBundle")
         .field("name", &self.name)
         .field("ops", &self.op_names())
         .finish()
    }
}

/// Namespace agregado (`app`): nombre → bundle wrapeado.
#[derive(Debug, Default)]
pub struct Namespace {
    entries: IndexMap<String, WrappedBundle>,
}

impl Namespace {
    pub(crate) fn new() -> Self {
        Self { entries: IndexMap::new() }
    }

    pub fn get(&self, name: &str) -> Option<&WrappedBundle> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Nombres registrados en orden de inserción.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Inserta (o sobreescribe) una entrada. Devuelve `true` si reemplazó una
    /// entrada previa con el mismo nombre.
    pub(crate) fn insert(&mut self, wrapped: WrappedBundle) -> bool {
        self.entries.insert(wrapped.name().to_string(), wrapped).is_some()
    }

    /// Invoca `bundle.field(args)` inyectando `{ app: self, details }` a la
    /// continuación. `self` se presta como referencia viva: la continuación
    /// observa el namespace al momento de la llamada.
    pub fn invoke_with(&self, details: &Value, bundle: &str, field: &str, args: &[Value]) -> Result<Value, ComposeError> {
        let entry = self.entries
                        .get(bundle)
                        .ok_or_else(|| ComposeError::UnknownBundle(bundle.to_string()))?;
        let op = entry.op(field)
                      .ok_or_else(|| ComposeError::UnknownField { bundle: bundle.to_string(),
                                                                  field: field.to_string() })?;
        match op.call(args) {
            Stage::Continuation(inject) => {
                let ctx = InjectionCtx { app: self, details };
                Ok(inject(&ctx))
            }
            Stage::Plain(_) => Err(ComposeError::NonFunctionContinuation),
        }
    }

    /// Forma estructural del namespace: nombres y operaciones, en orden de
    /// registro. No incluye comportamiento (los closures no son representables).
    pub fn shape(&self) -> Value {
        let bundles: Vec<Value> = self.entries
                                      .values()
                                      .map(|w| json!({"name": w.name(), "ops": w.op_names()}))
                                      .collect();
        json!({
            "composer_version": COMPOSER_VERSION,
            "bundles": bundles,
        })
    }

    /// Fingerprint determinista de la forma del namespace (blake3 sobre el
    /// JSON canónico de `shape`).
    pub fn fingerprint(&self) -> String {
        hash_value(&self.shape())
    }
}
