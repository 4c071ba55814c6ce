//! Core Composer implementation

use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

use crate::composer::builder::ComposerBuilder;
use crate::composer::{validate, wrap};
use crate::errors::ComposeError;
use crate::event::{ComposeEvent, ComposeEventKind, EventLog, InMemoryEventLog};
use crate::model::{BizObject, Namespace};

/// Motor de composición de business objects
///
/// Instancia propia y explícita: el namespace agregado y los details vigentes
/// son campos del composer, no estado global. Dos composers no interfieren
/// entre sí.
pub struct Composer<L>
    where L: EventLog
{
    id: Uuid,
    namespace: Namespace,
    details: Value,
    log: L,
}

impl Composer<InMemoryEventLog> {
    /// Crea un composer con journal en memoria, namespace vacío y details
    /// vacíos.
    pub fn new() -> Self {
        Self::from_parts(Value::Object(Map::new()), InMemoryEventLog::default())
    }

    /// Crea un composer con details iniciales tomados de la configuración de
    /// entorno (`BO_DETAILS_JSON`).
    pub fn from_env() -> Self {
        ComposerBuilder::from_env().build()
    }

    /// Crea un nuevo builder para configurar el composer
    #[inline]
    pub fn builder() -> ComposerBuilder<InMemoryEventLog> {
        ComposerBuilder::new()
    }
}

impl Default for Composer<InMemoryEventLog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Composer<L> where L: EventLog
{
    pub(crate) fn from_parts(details: Value, log: L) -> Self {
        Self { id: Uuid::new_v4(),
               namespace: Namespace::new(),
               details,
               log }
    }

    /// Identidad de esta instancia (aparece en los eventos del journal).
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Namespace agregado actual.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Details vigentes (los de la última composición exitosa).
    pub fn details(&self) -> &Value {
        &self.details
    }

    /// Eventos del journal en orden append.
    pub fn events(&self) -> Vec<ComposeEvent> {
        self.log.list()
    }

    /// Compone un batch de business objects dentro del namespace.
    ///
    /// Valida `details` y el batch completo antes de mutar nada; luego
    /// reemplaza los details vigentes, wrapea cada bundle en orden y lo
    /// inserta (o sobreescribe) bajo su `name`. Devuelve el namespace
    /// actualizado para permitir encadenar lecturas.
    pub fn compose(&mut self, objs: Vec<BizObject>, details: Value) -> Result<&Namespace, ComposeError> {
        validate::validate_details(&details)?;
        validate::validate_batch(&objs)?;

        // set details
        self.details = details;
        let _ = self.log.append_kind(self.id, ComposeEventKind::DetailsReplaced);

        for obj in objs {
            if let BizObject::Object(bundle) = obj {
                let wrapped = wrap::rewrap(bundle)?;
                let name = wrapped.name().to_string();
                let op_count = wrapped.op_count();
                let replaced = self.namespace.insert(wrapped);
                let _ = self.log.append_kind(self.id,
                                             ComposeEventKind::BundleRegistered { name, op_count, replaced });
            }
        }

        let fingerprint = self.namespace.fingerprint();
        let _ = self.log.append_kind(self.id,
                                     ComposeEventKind::ComposeCompleted { namespace_len: self.namespace.len(),
                                                                          fingerprint });

        Ok(&self.namespace)
    }

    /// Variante con `details` omitidos: equivale a componer con un objeto
    /// vacío (que también reemplaza los details anteriores).
    pub fn compose_default(&mut self, objs: Vec<BizObject>) -> Result<&Namespace, ComposeError> {
        self.compose(objs, Value::Object(Map::new()))
    }

    /// Invoca `bundle.field(args)` contra el estado actual del composer.
    ///
    /// La continuación recibe `{ app, details }` con referencias vivas: si el
    /// bundle fue registrado en una composición anterior, igual observa los
    /// details y el namespace de hoy.
    pub fn invoke(&self, bundle: &str, field: &str, args: &[Value]) -> Result<Value, ComposeError> {
        self.namespace.invoke_with(&self.details, bundle, field, args)
    }
}

impl<L> fmt::Debug for Composer<L> where L: EventLog
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composer")
         .field("id", &self.id)
         .field("namespace", &self.namespace.names())
         .field("details", &self.details)
         .finish()
    }
}
