//! Tipos de evento del journal y estructura `ComposeEvent`.
//!
//! Rol en el composer:
//! - Cada `compose` exitoso emite eventos a un `EventLog` append-only.
//! - El journal es puramente observacional: no hay replay ni persistencia.
//! - Una composición rechazada por validación no emite nada (fail fast, sin
//!   mutación parcial).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tipos de eventos del journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComposeEventKind {
    /// Los details vigentes fueron reemplazados por los de esta composición.
    DetailsReplaced,
    /// Un bundle fue wrapeado e insertado en el namespace. `replaced` indica
    /// que sobreescribió una entrada previa con el mismo nombre.
    BundleRegistered {
        name: String,
        op_count: usize,
        replaced: bool,
    },
    /// Cierre de una composición exitosa, con el fingerprint resultante del
    /// namespace.
    ComposeCompleted { namespace_len: usize, fingerprint: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeEvent {
    pub seq: u64, // asignado por el EventLog (orden append)
    pub composer_id: Uuid,
    pub kind: ComposeEventKind,
    pub ts: DateTime<Utc>, // metadato (no entra en fingerprint)
}
