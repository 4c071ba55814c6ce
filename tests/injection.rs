//! Inyección de contexto: argumentos de la primera etapa, llamadas cruzadas
//! vía `ctx.call`, campos de datos descartados y errores de lookup.

use bo_compose::{Bundle, ComposeError, Composer, Stage};
use serde_json::{json, Value};

#[test]
fn first_stage_receives_call_arguments() {
    let echo = Bundle::named("echo").with_fn("args", |args| {
                                        let copied: Vec<Value> = args.to_vec();
                                        Stage::inject(move |_ctx| json!(copied))
                                    });

    let mut composer = Composer::new();
    composer.compose_default(vec![echo.into()]).expect("echo");

    let out = composer.invoke("echo", "args", &[json!(1), json!("two")]).unwrap();
    assert_eq!(out, json!([1, "two"]));
}

#[test]
fn continuation_calls_bundle_registered_later() {
    // "front" llama a "back" a través del contexto; "back" se registra en una
    // composición posterior
    let front = Bundle::named("front").with_fn("greet", |_args| {
                                          Stage::inject(|ctx| {
                                              ctx.call("back", "reply", &[])
                                                 .unwrap_or(Value::Null)
                                          })
                                      });
    let back = Bundle::named("back").with_fn("reply", |_args| Stage::inject(|_ctx| json!("hi")));

    let mut composer = Composer::new();
    composer.compose_default(vec![front.into()]).expect("front");
    // todavía sin "back": la llamada cruzada falla dentro de la continuación
    assert_eq!(composer.invoke("front", "greet", &[]).unwrap(), Value::Null);

    composer.compose_default(vec![back.into()]).expect("back");
    assert_eq!(composer.invoke("front", "greet", &[]).unwrap(), json!("hi"));
}

#[test]
fn data_fields_are_dropped_from_the_wrapped_copy() {
    let bundle = Bundle::named("inv")
        .with_data("limit", json!(10))
        .with_fn("list", |_args| Stage::inject(|_ctx| json!([])));

    let mut composer = Composer::new();
    composer.compose_default(vec![bundle.into()]).expect("inv");

    let wrapped = composer.namespace().get("inv").expect("registered");
    assert_eq!(wrapped.name(), "inv");
    assert_eq!(wrapped.op_names(), vec!["list"]);
    assert!(!wrapped.has_op("limit"));
}

#[test]
fn unknown_bundle_and_field_are_usage_errors() {
    let mut composer = Composer::new();
    composer.compose_default(vec![Bundle::named("known").into()]).expect("known");

    let err = composer.invoke("ghost", "x", &[]).unwrap_err();
    assert_eq!(err, ComposeError::UnknownBundle("ghost".to_string()));
    assert_eq!(err.to_string(), "unknown business object [ghost]");

    let err = composer.invoke("known", "missing", &[]).unwrap_err();
    assert_eq!(err,
               ComposeError::UnknownField { bundle: "known".to_string(),
                                            field: "missing".to_string() });
    assert_eq!(err.to_string(), "unknown field [missing] on business object [known]");
}
