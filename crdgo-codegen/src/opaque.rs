//! Decode-at-runtime fallback for records with private state.

use crdgo_ir::{Codec, CodecFormat, Record, TypeDesc};

use crate::{
    builder::Expr, imports::ImportScope, literal::quote, serializer::GapReason, types::render_type,
};

const JSON_PACKAGE: &str = "encoding/json";

/// Emit a closure that rebuilds `record` by decoding its captured encoding.
///
/// ```go
/// func() *metav1.Time {
/// 	jsonStr := "\"2025-01-02T03:04:05Z\""
/// 	var obj metav1.Time
/// 	json.Unmarshal([]byte(jsonStr), &obj)
/// 	return &obj
/// }()
/// ```
///
/// With `pointer` unset the closure returns `T` and `obj` instead.
pub fn encode_opaque(
    record: &Record,
    codec: &Codec,
    pointer: bool,
    scope: &mut ImportScope<'_>,
) -> Result<Expr, GapReason> {
    let encoded = codec
        .encoded()
        .map_err(|e| GapReason::CodecFailed(e.to_string()))?;
    let ty = render_type(&TypeDesc::Struct(record.struct_type()), scope)?;
    let decode = match codec.format() {
        CodecFormat::Json => scope.qualify(JSON_PACKAGE, "Unmarshal"),
    };

    let (result, ret) = if pointer {
        (format!("*{}", ty), "return &obj")
    } else {
        (ty.clone(), "return obj")
    };
    Ok(Expr::closure(
        result,
        vec![
            format!("jsonStr := {}", quote(encoded)),
            format!("var obj {}", ty),
            format!("{}([]byte(jsonStr), &obj)", decode),
            ret.to_string(),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use crdgo_apiext::meta::Time;
    use crdgo_ir::{Reflect, Value};
    use serde::{Deserialize, Serialize, Serializer};

    use super::*;
    use crate::imports::ImportRegistry;

    fn time_record(time: &Time) -> Record {
        match time.reflect() {
            Value::Record(record) => record,
            other => panic!("expected a record, got {other:?}"),
        }
    }

    #[test]
    fn test_pointer_closure() {
        let record = time_record(&Time::new("2025-01-02T03:04:05Z"));
        let codec = record.codec.clone().unwrap();
        let mut registry = ImportRegistry::new()
            .with_alias("k8s.io/apimachinery/pkg/apis/meta/v1", "metav1");
        let mut scope = ImportScope::new(&mut registry);

        let expr = encode_opaque(&record, &codec, true, &mut scope).unwrap();
        assert_eq!(
            expr.render(),
            "func() *metav1.Time {\n\
             \tjsonStr := \"\\\"2025-01-02T03:04:05Z\\\"\"\n\
             \tvar obj metav1.Time\n\
             \tjson.Unmarshal([]byte(jsonStr), &obj)\n\
             \treturn &obj\n\
             }()"
        );
        let paths: Vec<String> = scope.imports().into_iter().map(|i| i.path).collect();
        assert_eq!(
            paths,
            vec!["encoding/json", "k8s.io/apimachinery/pkg/apis/meta/v1"]
        );
    }

    #[test]
    fn test_value_closure() {
        let record = time_record(&Time::new("2025-01-02T03:04:05Z"));
        let codec = record.codec.clone().unwrap();
        let mut registry = ImportRegistry::new();
        let mut scope = ImportScope::new(&mut registry);

        let rendered = encode_opaque(&record, &codec, false, &mut scope)
            .unwrap()
            .render();
        assert!(rendered.starts_with("func() v1.Time {\n"));
        assert!(rendered.contains("\n\treturn obj\n"));
    }

    #[test]
    fn test_embedded_text_decodes_to_original() {
        let original = Time::new("2025-01-02T03:04:05Z");
        let record = time_record(&original);
        let encoded = record.codec.as_ref().unwrap().encoded().unwrap();
        let decoded: Time = serde_json::from_str(encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[derive(Deserialize)]
    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot encode"))
        }
    }

    #[test]
    fn test_codec_failure() {
        let record = Record::named("example.com/x", "Opaque").private("state", Value::bool(true));
        let codec = Codec::json(&Unencodable);
        let mut registry = ImportRegistry::new();
        let mut scope = ImportScope::new(&mut registry);

        let err = encode_opaque(&record, &codec, true, &mut scope).unwrap_err();
        assert_eq!(err, GapReason::CodecFailed("cannot encode".into()));
    }
}
