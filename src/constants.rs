//! Constantes del composer.
//!
//! Este módulo agrupa valores estáticos que participan en el cálculo del
//! fingerprint del namespace. Cambios en estas constantes invalidan
//! fingerprints previos aunque los bundles no cambien (por diseño,
//! `COMPOSER_VERSION` forma parte del input del hashing).

/// Versión lógica del composer. Se incluye en el input del fingerprint del
/// namespace para que un cambio incompatible del composer produzca
/// fingerprints distintos con los mismos bundles. Mantener estable mientras
/// no haya cambios incompatibles.
pub const COMPOSER_VERSION: &str = "1.0";
