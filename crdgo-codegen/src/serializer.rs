//! Structural value serializer.
//!
//! Turns a [`Value`] into a Go expression that rebuilds it. Shapes that have
//! no literal form are never silently dropped: each one is recorded as an
//! [`Unsupported`] gap carrying the path of the value and the reason, and
//! the enclosing literal is emitted without it.

use std::fmt;

use crdgo_core::capitalize;
use crdgo_ir::{Record, ScalarValue, TypeDesc, Value};

use crate::{
    builder::{Entry, Expr},
    imports::{Import, ImportRegistry, ImportScope},
    literal::{encode_literal, primitive_literal},
    opaque::encode_opaque,
    types::render_type,
};

/// Go package providing `pointer.String(...)` style helpers.
pub const POINTER_PACKAGE: &str = "github.com/zoumo/golib/pointer";

/// Why a value could not be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GapReason {
    Channel,
    Function,
    /// A non-zero private field on a record without a codec.
    PrivateField,
    PointerToPointer,
    /// The record's codec could not encode it.
    CodecFailed(String),
}

impl fmt::Display for GapReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Channel => f.write_str("channel values have no literal form"),
            Self::Function => f.write_str("function values have no literal form"),
            Self::PrivateField => f.write_str("private field cannot be set from a literal"),
            Self::PointerToPointer => f.write_str("pointer to pointer has no literal form"),
            Self::CodecFailed(e) => write!(f, "encoding failed: {}", e),
        }
    }
}

/// A value left out of the emitted source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsupported {
    /// Location of the value, e.g. `Spec.Versions[0].Schema`.
    pub path: String,
    pub reason: GapReason,
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "{}: {}", self.path, self.reason)
        }
    }
}

/// Outcome of serializing one value.
#[derive(Debug, Clone, PartialEq)]
pub enum Emitted {
    Expr(Expr),
    Unsupported(Unsupported),
}

impl Emitted {
    pub fn expr(self) -> Option<Expr> {
        match self {
            Self::Expr(expr) => Some(expr),
            Self::Unsupported(_) => None,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

/// Serializes values for one output file.
///
/// Every gap met along the way is collected, including the ones inside
/// values that were otherwise emitted.
#[derive(Debug)]
pub struct Serializer<'r> {
    scope: ImportScope<'r>,
    path: Vec<String>,
    gaps: Vec<Unsupported>,
}

impl<'r> Serializer<'r> {
    pub fn new(registry: &'r mut ImportRegistry) -> Self {
        Self {
            scope: ImportScope::new(registry),
            path: Vec::new(),
            gaps: Vec::new(),
        }
    }

    /// The file's import scope, for spelling types outside of values.
    pub fn scope(&mut self) -> &mut ImportScope<'r> {
        &mut self.scope
    }

    /// Serialize `value`. With `omit_type` set, composite literals leave out
    /// their type, as Go allows inside a typed slice or map literal.
    pub fn serialize(&mut self, value: &Value, omit_type: bool) -> Emitted {
        self.serialize_at("", value, omit_type)
    }

    /// Like [`serialize`](Self::serialize), with gap paths rooted at `root`.
    pub fn serialize_at(&mut self, root: &str, value: &Value, omit_type: bool) -> Emitted {
        self.path.clear();
        if !root.is_empty() {
            self.path.push(root.to_string());
        }
        let emitted = match self.value(value, omit_type) {
            Ok(expr) => Emitted::Expr(expr),
            Err(reason) => Emitted::Unsupported(self.gap(reason)),
        };
        self.path.clear();
        emitted
    }

    pub fn gaps(&self) -> &[Unsupported] {
        &self.gaps
    }

    /// The imports used so far, and every gap recorded.
    pub fn finish(self) -> (Vec<Import>, Vec<Unsupported>) {
        (self.scope.imports(), self.gaps)
    }

    fn value(&mut self, value: &Value, omit_type: bool) -> Result<Expr, GapReason> {
        match value {
            Value::Scalar(scalar) => Ok(encode_literal(scalar, &mut self.scope)),
            Value::Pointer { target, .. } => match target {
                None => Ok(Expr::raw("nil")),
                Some(target) => self.pointer(target, omit_type),
            },
            Value::List { ty, items } => {
                let ty = self.type_prefix(ty, omit_type)?;
                let mut entries = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    if let Some(expr) = self.nested(format!("[{}]", i), item, true) {
                        entries.push(Entry::positional(expr));
                    }
                }
                Ok(Expr::composite(ty, entries))
            }
            Value::Map { ty, entries } => {
                let ty = self.type_prefix(ty, omit_type)?;
                let mut pairs: Vec<(String, Entry)> = Vec::with_capacity(entries.len());
                for (key, item) in entries {
                    let Some(key) = self.nested("[?]".to_string(), key, false) else {
                        continue;
                    };
                    let text = key.inline();
                    if pairs.iter().any(|(seen, _)| *seen == text) {
                        continue;
                    }
                    if let Some(expr) = self.nested(format!("[{}]", text), item, true) {
                        pairs.push((text, Entry::keyed(key, expr)));
                    }
                }
                pairs.sort_by(|a, b| a.0.cmp(&b.0));
                Ok(Expr::composite(
                    ty,
                    pairs.into_iter().map(|(_, entry)| entry).collect(),
                ))
            }
            Value::Record(record) => self.record(record, false, omit_type),
            Value::Chan(_) => Err(GapReason::Channel),
            Value::Func => Err(GapReason::Function),
        }
    }

    fn pointer(&mut self, target: &Value, omit_type: bool) -> Result<Expr, GapReason> {
        match target {
            Value::Scalar(scalar) => Ok(self.scalar_pointer(scalar)),
            Value::Record(record) => self.record(record, true, omit_type),
            Value::Pointer { .. } => Err(GapReason::PointerToPointer),
            Value::Chan(_) => Err(GapReason::Channel),
            Value::Func => Err(GapReason::Function),
            Value::List { .. } | Value::Map { .. } => {
                Ok(Expr::address_of(self.value(target, false)?))
            }
        }
    }

    /// `pointer.Int32(int32(5))`, converted for named types:
    /// `(*v1.ResourceScope)(pointer.String("Cluster"))`.
    fn scalar_pointer(&mut self, scalar: &ScalarValue) -> Expr {
        let helper = self
            .scope
            .qualify(POINTER_PACKAGE, &capitalize(scalar.kind().as_str()));
        let call = Expr::call(helper, vec![primitive_literal(scalar, &mut self.scope)]);
        match scalar.name() {
            Some(name) => {
                let ty = self.scope.qualify(&name.package, &name.name);
                Expr::call(format!("(*{})", ty), vec![call])
            }
            None => call,
        }
    }

    fn record(&mut self, record: &Record, pointer: bool, omit_type: bool) -> Result<Expr, GapReason> {
        if record.has_private_fields() {
            if let Some(codec) = &record.codec {
                match encode_opaque(record, codec, pointer, &mut self.scope) {
                    Ok(expr) => return Ok(expr),
                    Err(reason) => {
                        self.gap(reason);
                    }
                }
            }
        }

        let ty = self.type_prefix(&TypeDesc::Struct(record.struct_type()), omit_type)?;
        let mut entries = Vec::new();
        for field in &record.fields {
            if field.value.is_zero() {
                continue;
            }
            if field.is_private() {
                self.path.push(format!(".{}", field.name));
                self.gap(GapReason::PrivateField);
                self.path.pop();
                continue;
            }
            if field.embedded && field.value.ty().type_name().is_none() {
                continue;
            }
            if let Some(expr) = self.nested(format!(".{}", field.name), &field.value, false) {
                entries.push(Entry::keyed(Expr::raw(field.name.clone()), expr));
            }
        }

        let literal = Expr::composite(ty, entries);
        if pointer && !omit_type {
            Ok(Expr::address_of(literal))
        } else {
            Ok(literal)
        }
    }

    fn type_prefix(&mut self, ty: &TypeDesc, omit_type: bool) -> Result<Option<String>, GapReason> {
        if omit_type {
            return Ok(None);
        }
        render_type(ty, &mut self.scope).map(Some)
    }

    /// Serialize a child value, recording its gap under `segment`.
    fn nested(&mut self, segment: String, value: &Value, omit_type: bool) -> Option<Expr> {
        self.path.push(segment);
        let result = match self.value(value, omit_type) {
            Ok(expr) => Some(expr),
            Err(reason) => {
                self.gap(reason);
                None
            }
        };
        self.path.pop();
        result
    }

    fn gap(&mut self, reason: GapReason) -> Unsupported {
        let path = self.path.concat();
        let gap = Unsupported {
            path: path.strip_prefix('.').unwrap_or(&path).to_string(),
            reason,
        };
        self.gaps.push(gap.clone());
        gap
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crdgo_apiext::meta::{ObjectMeta, Time};
    use crdgo_ir::{Reflect, ScalarKind, TypeName};

    use super::*;

    const PKG: &str = "example.com/widgets/v1";

    fn emit(value: &Value, omit_type: bool) -> (String, Vec<Unsupported>, Vec<String>) {
        let mut registry = ImportRegistry::new()
            .with_alias("k8s.io/apimachinery/pkg/apis/meta/v1", "metav1");
        let mut serializer = Serializer::new(&mut registry);
        let rendered = match serializer.serialize(value, omit_type) {
            Emitted::Expr(expr) => expr.render(),
            Emitted::Unsupported(gap) => format!("<{}>", gap),
        };
        let (imports, gaps) = serializer.finish();
        (rendered, gaps, imports.into_iter().map(|i| i.path).collect())
    }

    fn render(value: &Value) -> String {
        emit(value, false).0
    }

    fn string() -> TypeDesc {
        TypeDesc::scalar(ScalarKind::String)
    }

    #[test]
    fn test_scalars_delegate_to_literals() {
        assert_eq!(render(&Value::string("x")), r#""x""#);
        assert_eq!(render(&5i32.reflect()), "int32(5)");
    }

    #[test]
    fn test_scalar_pointers_use_helpers() {
        let (rendered, _, imports) = emit(&Some("x".to_string()).reflect(), false);
        assert_eq!(rendered, r#"pointer.String("x")"#);
        assert_eq!(imports, vec![POINTER_PACKAGE.to_string()]);

        assert_eq!(render(&Some(5i32).reflect()), "pointer.Int32(int32(5))");
        assert_eq!(render(&Some(true).reflect()), "pointer.Bool(true)");
        assert_eq!(render(&None::<i64>.reflect()), "nil");
    }

    #[test]
    fn test_named_scalar_pointer_is_converted() {
        let scope = ScalarValue::string("Cluster").named(TypeName::new(PKG, "ResourceScope"));
        let value = Value::pointer_to(scope.into());
        assert_eq!(render(&value), r#"(*v1.ResourceScope)(pointer.String("Cluster"))"#);
    }

    #[test]
    fn test_struct_pointer_takes_address() {
        let record = Record::named(PKG, "Spec").field("Replicas", 3i32.reflect());
        let value = Value::pointer_to(record.into());
        assert_eq!(render(&value), "&v1.Spec{\n\tReplicas: int32(3),\n}");
        assert_eq!(emit(&value, true).0, "{\n\tReplicas: int32(3),\n}");
    }

    #[test]
    fn test_pointer_to_slice() {
        let value = Value::pointer_to(vec!["a".to_string()].reflect());
        assert_eq!(render(&value), "&[]string{\n\t\"a\",\n}");
    }

    #[test]
    fn test_pointer_to_pointer_is_unsupported() {
        let value = Value::pointer_to(Some(1i32).reflect());
        let (rendered, gaps, _) = emit(&value, false);
        assert_eq!(rendered, "<pointer to pointer has no literal form>");
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].reason, GapReason::PointerToPointer);
    }

    #[test]
    fn test_slices() {
        let value = vec!["a".to_string(), "b".to_string()].reflect();
        assert_eq!(render(&value), "[]string{\n\t\"a\",\n\t\"b\",\n}");
        assert_eq!(render(&Vec::<String>::new().reflect()), "[]string{}");
        assert_eq!(render(&[1u8, 2].reflect()), "[2]uint8{\n\tuint8(0x1),\n\tuint8(0x2),\n}");
    }

    #[test]
    fn test_slice_of_records_omits_element_types() {
        let items = vec![
            Record::named(PKG, "Item").field("Name", Value::string("a")).into(),
            Record::named(PKG, "Item").into(),
        ];
        let value = Value::slice(TypeDesc::named_struct(PKG, "Item"), items);
        assert_eq!(
            render(&value),
            "[]v1.Item{\n\t{\n\t\tName: \"a\",\n\t},\n\t{},\n}"
        );
    }

    #[test]
    fn test_map_keys_are_sorted_and_unique() {
        let value = Value::map(
            string(),
            TypeDesc::scalar(ScalarKind::Int),
            vec![
                (Value::string("b"), Value::Scalar(ScalarValue::signed(ScalarKind::Int, 2))),
                (Value::string("a"), Value::Scalar(ScalarValue::signed(ScalarKind::Int, 1))),
                (Value::string("b"), Value::Scalar(ScalarValue::signed(ScalarKind::Int, 3))),
            ],
        );
        assert_eq!(render(&value), "map[string]int{\n\t\"a\": 1,\n\t\"b\": 2,\n}");
    }

    #[test]
    fn test_map_of_records() {
        let mut props = BTreeMap::new();
        props.insert("spec".to_string(), Record::named(PKG, "Props").field("Type", Value::string("object")));
        let value = Value::map(
            string(),
            TypeDesc::named_struct(PKG, "Props"),
            props.into_iter().map(|(k, v)| (Value::string(k), v.into())).collect(),
        );
        assert_eq!(
            render(&value),
            "map[string]v1.Props{\n\t\"spec\": {\n\t\tType: \"object\",\n\t},\n}"
        );
    }

    #[test]
    fn test_zero_fields_are_omitted() {
        let record = Record::named(PKG, "Spec")
            .field("Group", Value::string("acme.io"))
            .field("Scope", Value::string(""))
            .field("Replicas", None::<i32>.reflect())
            .field("Served", Value::bool(false))
            .field("Names", Vec::<String>::new().reflect());
        assert_eq!(render(&record.into()), "v1.Spec{\n\tGroup: \"acme.io\",\n}");
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let record = Record::named(PKG, "Spec")
            .field("Zeta", Value::bool(true))
            .field("Alpha", Value::bool(true));
        assert_eq!(
            render(&record.into()),
            "v1.Spec{\n\tZeta: true,\n\tAlpha: true,\n}"
        );
    }

    #[test]
    fn test_private_fields_are_recorded() {
        let record = Record::named(PKG, "Spec")
            .field("Name", Value::string("x"))
            .private("cache", Value::string("warm"))
            .private("unset", Value::string(""));
        let (rendered, gaps, _) = emit(&record.into(), false);
        assert_eq!(rendered, "v1.Spec{\n\tName: \"x\",\n}");
        assert_eq!(
            gaps,
            vec![Unsupported {
                path: "cache".into(),
                reason: GapReason::PrivateField,
            }]
        );
    }

    #[test]
    fn test_embedded_fields() {
        let meta = ObjectMeta {
            name: "widgets.acme.io".into(),
            ..Default::default()
        };
        let inline = Record::anonymous().field("Hidden", Value::bool(true));
        let record = Record::named(PKG, "Widget")
            .embed("ObjectMeta", meta.reflect())
            .embed("", inline.into());
        assert_eq!(
            render(&record.into()),
            "v1.Widget{\n\tObjectMeta: metav1.ObjectMeta{\n\t\tName: \"widgets.acme.io\",\n\t},\n}"
        );
    }

    #[test]
    fn test_anonymous_struct_field_renders_inline() {
        let inline = Record::anonymous()
            .field("A", Value::string("x"))
            .field("B", 2i32.reflect());
        let record = Record::named(PKG, "Holder").field("Inline", inline.into());
        assert_eq!(
            render(&record.into()),
            "v1.Holder{\n\tInline: struct { A string; B int32 }{\n\t\tA: \"x\",\n\t\tB: int32(2),\n\t},\n}"
        );
    }

    #[test]
    fn test_private_state_falls_back_to_codec() {
        let meta = ObjectMeta {
            creation_timestamp: Time::new("2025-01-02T03:04:05Z"),
            ..Default::default()
        };
        let (rendered, gaps, imports) = emit(&meta.reflect(), false);
        assert_eq!(
            rendered,
            "metav1.ObjectMeta{\n\
             \tCreationTimestamp: func() metav1.Time {\n\
             \t\tjsonStr := \"\\\"2025-01-02T03:04:05Z\\\"\"\n\
             \t\tvar obj metav1.Time\n\
             \t\tjson.Unmarshal([]byte(jsonStr), &obj)\n\
             \t\treturn obj\n\
             \t}(),\n\
             }"
        );
        assert!(gaps.is_empty());
        assert_eq!(
            imports,
            vec![
                "encoding/json".to_string(),
                "k8s.io/apimachinery/pkg/apis/meta/v1".to_string()
            ]
        );
    }

    #[test]
    fn test_codec_pointer_fallback() {
        let value = Value::pointer_to(Time::new("2025-01-02T03:04:05Z").reflect());
        let rendered = render(&value);
        assert!(rendered.starts_with("func() *metav1.Time {"));
        assert!(rendered.ends_with("\treturn &obj\n}()"));
    }

    #[test]
    fn test_channel_and_function_items_are_dropped() {
        let value = Value::slice(
            TypeDesc::chan(string()),
            vec![Value::Chan(string()), Value::Chan(string())],
        );
        let (rendered, gaps, _) = emit(&value, false);
        assert_eq!(rendered, "[]chan string{}");
        let paths: Vec<&str> = gaps.iter().map(|g| g.path.as_str()).collect();
        assert_eq!(paths, vec!["[0]", "[1]"]);
        assert!(gaps.iter().all(|g| g.reason == GapReason::Channel));

        let record = Record::named(PKG, "Hooks").field("OnChange", Value::Func);
        let (rendered, gaps, _) = emit(&record.into(), false);
        assert_eq!(rendered, "v1.Hooks{}");
        assert_eq!(
            gaps,
            vec![Unsupported {
                path: "OnChange".into(),
                reason: GapReason::Function,
            }]
        );
    }

    #[test]
    fn test_gap_paths_are_rooted() {
        let inner = Record::named(PKG, "Version").field("Watch", Value::Chan(string()));
        let record = Record::named(PKG, "Spec").field(
            "Versions",
            Value::slice(TypeDesc::named_struct(PKG, "Version"), vec![inner.into()]),
        );
        let mut registry = ImportRegistry::new();
        let mut serializer = Serializer::new(&mut registry);
        let emitted = serializer.serialize_at("crd", &record.into(), false);
        assert!(!emitted.is_unsupported());
        assert_eq!(serializer.gaps()[0].path, "crd.Versions[0].Watch");
    }

    #[test]
    fn test_top_level_function_is_unsupported() {
        let mut registry = ImportRegistry::new();
        let mut serializer = Serializer::new(&mut registry);
        let emitted = serializer.serialize(&Value::Func, false);
        assert!(emitted.is_unsupported());
        assert_eq!(emitted.expr(), None);
    }
}
