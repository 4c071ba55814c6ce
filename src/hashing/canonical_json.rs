//! Canonical JSON minimal – claves de objetos ordenadas, sin espacios.
//! La forma canónica es la base del fingerprint del namespace.

use serde_json::Value;

pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => serde_json::to_string(s).unwrap(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(to_canonical_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by_key(|(k, _)| k.as_str());
            let items: Vec<String> = entries.into_iter()
                                            .map(|(k, v)| {
                                                format!("{}:{}",
                                                        serde_json::to_string(k).unwrap(),
                                                        to_canonical_json(v))
                                            })
                                            .collect();
            format!("{{{}}}", items.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_keys_are_sorted() {
        let a = json!({"b": 1, "a": {"z": true, "y": null}});
        assert_eq!(to_canonical_json(&a), r#"{"a":{"y":null,"z":true},"b":1}"#);
    }

    #[test]
    fn arrays_preserve_order() {
        let a = json!(["b", "a", 3]);
        assert_eq!(to_canonical_json(&a), r#"["b","a",3]"#);
    }
}
