use chrono::Utc;
use uuid::Uuid;

use super::{ComposeEvent, ComposeEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventLog {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, composer_id: Uuid, kind: ComposeEventKind) -> ComposeEvent;
    /// Lista los eventos en orden ascendente por seq.
    fn list(&self) -> Vec<ComposeEvent>;
}

pub struct InMemoryEventLog { pub inner: Vec<ComposeEvent> }

impl Default for InMemoryEventLog { fn default() -> Self { Self { inner: Vec::new() } } }

impl EventLog for InMemoryEventLog {
    fn append_kind(&mut self, composer_id: Uuid, kind: ComposeEventKind) -> ComposeEvent {
        let seq = self.inner.len() as u64;
        let ev = ComposeEvent { seq, composer_id, kind, ts: Utc::now() };
        self.inner.push(ev.clone());
        ev
    }
    fn list(&self) -> Vec<ComposeEvent> { self.inner.clone() }
}
