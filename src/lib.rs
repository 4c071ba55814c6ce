//! bo-compose: composición de business objects en un namespace agregado
pub mod composer;
pub mod config;
pub mod constants;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod model;

pub use composer::{Composer, ComposerBuilder};
pub use errors::ComposeError;
pub use event::{ComposeEvent, ComposeEventKind, EventLog, InMemoryEventLog};
pub use model::{BizObject, Bundle, BundleFn, FieldValue, InjectFn, InjectionCtx, Namespace, Stage, WrappedBundle};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    // Operación con estado propio, implementada sobre struct (la variante
    // closure está cubierta por los tests de integración)
    struct Greeter {
        prefix: String,
    }

    impl BundleFn for Greeter {
        fn call(&self, args: &[Value]) -> Stage {
            let who = args.get(0)
                          .and_then(|v| v.as_str())
                          .unwrap_or("world")
                          .to_string();
            let prefix = self.prefix.clone();
            Stage::inject(move |_ctx| json!(format!("{prefix} {who}")))
        }
    }

    #[test]
    fn struct_backed_op_composes_and_invokes() {
        let bundle = Bundle::named("greet").with_op("hello",
                                                    Box::new(Greeter { prefix: "hola".to_string() }));

        let mut composer = Composer::new();
        composer.compose_default(vec![bundle.into()]).expect("batch válido");

        let out = composer.invoke("greet", "hello", &[json!("mundo")]).expect("greet.hello");
        assert_eq!(out, json!("hola mundo"));
    }

    #[test]
    fn namespace_reference_is_live_inside_continuations() {
        // "late" se registra después que "early"; la continuación de "early"
        // igual lo observa, porque el contexto se resuelve al invocar.
        let early = Bundle::named("early").with_fn("sees_late", |_args| {
                                              Stage::inject(|ctx| json!(ctx.app.contains("late")))
                                          });
        let late = Bundle::named("late");

        let mut composer = Composer::new();
        composer.compose_default(vec![early.into()]).expect("early");
        assert_eq!(composer.invoke("early", "sees_late", &[]).unwrap(), json!(false));

        composer.compose_default(vec![late.into()]).expect("late");
        assert_eq!(composer.invoke("early", "sees_late", &[]).unwrap(), json!(true));
    }

    #[test]
    fn two_composers_do_not_interfere() {
        let mut a = Composer::new();
        let mut b = Composer::new();

        a.compose_default(vec![Bundle::named("solo_a").into()]).unwrap();
        b.compose_default(vec![Bundle::named("solo_b").into()]).unwrap();

        assert!(a.namespace().contains("solo_a"));
        assert!(!a.namespace().contains("solo_b"));
        assert!(b.namespace().contains("solo_b"));
        assert!(!b.namespace().contains("solo_a"));
    }
}
