//! Modelos del composer (Bundle, Namespace, InjectionCtx,...)

pub mod bundle;
pub mod context;
pub mod namespace;

pub use bundle::{BizObject, Bundle, BundleFn, FieldValue, InjectFn, Stage};
pub use context::InjectionCtx;
pub use namespace::{Namespace, WrappedBundle};
