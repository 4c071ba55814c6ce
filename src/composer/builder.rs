//! Builder para `Composer`.
//!
//! Permite fijar los details iniciales y reemplazar el journal antes de
//! construir la instancia. `from_env` toma los details por defecto de la
//! configuración de entorno.

use serde_json::{Map, Value};

use crate::composer::Composer;
use crate::config::CONFIG;
use crate::event::{EventLog, InMemoryEventLog};

/// Builder del composer. Estado acumulado: journal + details iniciales.
pub struct ComposerBuilder<L: EventLog = InMemoryEventLog> {
    log: L,
    details: Value,
}

impl ComposerBuilder<InMemoryEventLog> {
    /// Builder con journal en memoria y details vacíos.
    pub fn new() -> Self {
        Self { log: InMemoryEventLog::default(),
               details: Value::Object(Map::new()) }
    }

    /// Builder con details iniciales desde `BO_DETAILS_JSON`.
    pub fn from_env() -> Self {
        Self::new().with_details(CONFIG.default_details.clone())
    }
}

impl Default for ComposerBuilder<InMemoryEventLog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: EventLog> ComposerBuilder<L> {
    /// Reemplaza el journal por otra implementación de `EventLog`.
    #[inline]
    pub fn with_log<M: EventLog>(self, log: M) -> ComposerBuilder<M> {
        ComposerBuilder { log, details: self.details }
    }

    /// Fija los details iniciales (vigentes hasta el primer `compose`).
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Construye el `Composer` final. Consume el builder.
    #[inline]
    pub fn build(self) -> Composer<L> {
        Composer::from_parts(self.details, self.log)
    }
}
