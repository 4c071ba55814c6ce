use serde_json::Value;

use super::namespace::Namespace;
use crate::errors::ComposeError;

/// Contexto inyectado entregado a cada continuación.
pub struct InjectionCtx<'a> {
    pub app: &'a Namespace,  // referencia viva: refleja el namespace al momento de la llamada
    pub details: &'a Value,  // details vigentes (reemplazados en cada compose)
}

impl<'a> InjectionCtx<'a> {
    /// Invoca otra función wrapeada contra el mismo estado vivo. Permite que
    /// una continuación llame bundles registrados en composes posteriores.
    pub fn call(&self, bundle: &str, field: &str, args: &[Value]) -> Result<Value, ComposeError> {
        self.app.invoke_with(self.details, bundle, field, args)
    }
}
