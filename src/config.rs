//! Configuración central del crate.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
//! Provee los details por defecto para composers construidos vía `from_env`.
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::env;

/// Configuración global del composer.
pub struct BundlerConfig {
    /// Details por defecto, tomados de `BO_DETAILS_JSON` (JSON de un objeto).
    /// Objeto vacío si la variable falta o no parsea a un objeto.
    pub default_details: Value,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<BundlerConfig> = Lazy::new(|| {
    // Cargar .env si existe
    let _ = dotenvy::dotenv();
    let default_details = env::var("BO_DETAILS_JSON")
        .ok()
        .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
        .filter(|v| v.is_object())
        .unwrap_or_else(|| Value::Object(Map::new()));
    BundlerConfig { default_details }
});
