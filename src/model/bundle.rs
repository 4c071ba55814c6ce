//! Business objects ("bundles") y su contrato de dos etapas.
//!
//! Un bundle es un registro dinámico de campos con nombre. Cada campo es o
//! bien un dato plano (`serde_json::Value`) o bien una función de dos etapas:
//! la primera etapa recibe los argumentos de la llamada y debe devolver una
//! continuación que recibirá el contexto inyectado (`InjectionCtx`). El campo
//! `name` es un campo más cuyo valor string identifica al bundle dentro del
//! namespace.

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

use super::context::InjectionCtx;

/// Continuación de la segunda etapa: recibe el contexto inyectado y produce
/// el resultado de la llamada.
pub type InjectFn = Box<dyn Fn(&InjectionCtx) -> Value + Send + Sync>;

/// Resultado de la primera etapa de una función de bundle.
///
/// El contrato exige `Continuation`; `Plain` representa un valor no invocable
/// y viola el contrato (el error se reporta recién al invocar el wrapper).
pub enum Stage {
    /// Continuación invocable que recibirá `{ app, details }`.
    Continuation(InjectFn),
    /// Valor plano no invocable.
    Plain(Value),
}

impl Stage {
    /// Construye una `Continuation` a partir de un closure.
    pub fn inject<F>(f: F) -> Self
        where F: Fn(&InjectionCtx) -> Value + Send + Sync + 'static
    {
        Stage::Continuation(Box::new(f))
    }

    /// Construye un valor plano (violación del contrato de dos etapas).
    pub fn plain(value: Value) -> Self {
        Stage::Plain(value)
    }

    /// Chequeo explícito de invocabilidad.
    pub fn is_callable(&self) -> bool {
        matches!(self, Stage::Continuation(_))
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Continuation(_) => f.write_str("Stage::Continuation(<fn>)"),
            Stage::Plain(v) => write!(f, "Stage::Plain({v})"),
        }
    }
}

/// Primera etapa de una función de bundle.
///
/// Implementado automáticamente por cualquier closure
/// `Fn(&[Value]) -> Stage`; también puede implementarse sobre structs cuando
/// la operación lleva estado propio.
pub trait BundleFn: Send + Sync {
    /// Recibe los argumentos de la llamada y devuelve la segunda etapa.
    fn call(&self, args: &[Value]) -> Stage;
}

impl<F> BundleFn for F where F: Fn(&[Value]) -> Stage + Send + Sync
{
    fn call(&self, args: &[Value]) -> Stage {
        self(args)
    }
}

/// Valor de un campo de bundle: dato plano o función de dos etapas.
pub enum FieldValue {
    Data(Value),
    Op(Box<dyn BundleFn>),
}

impl FieldValue {
    /// Chequeo explícito función-vs-dato usado por el rewrap.
    pub fn is_op(&self) -> bool {
        matches!(self, FieldValue::Op(_))
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Data(v) => write!(f, "Data({v})"),
            FieldValue::Op(_) => f.write_str("Op(<fn>)"),
        }
    }
}

/// Un business object previo a la composición. Inmutable una vez entregado a
/// `compose`: el composer lo consume, nunca lo muta.
#[derive(Debug, Default)]
pub struct Bundle {
    fields: IndexMap<String, FieldValue>,
}

impl Bundle {
    /// Bundle vacío, sin `name`. Un compose con este bundle falla la
    /// validación de nombre.
    pub fn new() -> Self {
        Self { fields: IndexMap::new() }
    }

    /// Bundle con el campo `name` ya fijado.
    pub fn named(name: &str) -> Self {
        Self::new().with_data("name", Value::String(name.to_string()))
    }

    /// Agrega (o reemplaza) un campo de datos.
    pub fn with_data(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), FieldValue::Data(value));
        self
    }

    /// Agrega (o reemplaza) un campo función de dos etapas.
    pub fn with_fn<F>(mut self, key: &str, f: F) -> Self
        where F: Fn(&[Value]) -> Stage + Send + Sync + 'static
    {
        self.fields.insert(key.to_string(), FieldValue::Op(Box::new(f)));
        self
    }

    /// Variante de `with_fn` para operaciones con estado propio.
    pub fn with_op(mut self, key: &str, op: Box<dyn BundleFn>) -> Self {
        self.fields.insert(key.to_string(), FieldValue::Op(op));
        self
    }

    /// Valor string del campo `name`, si está presente.
    pub fn name(&self) -> Option<&str> {
        match self.fields.get("name") {
            Some(FieldValue::Data(Value::String(s))) => Some(s),
            _ => None,
        }
    }

    /// Campos en orden de inserción.
    pub fn fields(&self) -> &IndexMap<String, FieldValue> {
        &self.fields
    }

    pub(crate) fn into_fields(self) -> IndexMap<String, FieldValue> {
        self.fields
    }
}

/// Elemento de entrada a `compose`.
///
/// La firma admite valores primitivos para poder detectarlos y rechazarlos en
/// validación, igual que hace la validación del batch sobre la secuencia
/// completa.
#[derive(Debug)]
pub enum BizObject {
    /// Un bundle propiamente dicho.
    Object(Bundle),
    /// Un valor plano que no es un business object.
    Primitive(Value),
}

impl BizObject {
    pub fn as_bundle(&self) -> Option<&Bundle> {
        match self {
            BizObject::Object(b) => Some(b),
            BizObject::Primitive(_) => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, BizObject::Object(_))
    }
}

impl From<Bundle> for BizObject {
    fn from(bundle: Bundle) -> Self {
        BizObject::Object(bundle)
    }
}
