//! Values in shape form.

use serde::{Serialize, de::DeserializeOwned};

use crate::types::{FieldType, Kind, ScalarKind, StructType, TypeDesc, TypeName};

/// The primitive payload of a scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
}

/// A scalar value together with its kind and optional declared type.
///
/// The constructors keep kind and payload consistent: a signed kind always
/// carries [`Literal::Int`], an unsigned kind [`Literal::Uint`], and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarValue {
    kind: ScalarKind,
    name: Option<TypeName>,
    literal: Literal,
}

impl ScalarValue {
    pub fn bool(v: bool) -> Self {
        Self {
            kind: ScalarKind::Bool,
            name: None,
            literal: Literal::Bool(v),
        }
    }

    pub fn string(v: impl Into<String>) -> Self {
        Self {
            kind: ScalarKind::String,
            name: None,
            literal: Literal::String(v.into()),
        }
    }

    /// A signed integer of the given kind. Non-signed kinds fall back to `int64`.
    pub fn signed(kind: ScalarKind, v: i64) -> Self {
        let kind = if kind.is_signed() {
            kind
        } else {
            ScalarKind::Int64
        };
        Self {
            kind,
            name: None,
            literal: Literal::Int(v),
        }
    }

    /// An unsigned integer of the given kind. Non-unsigned kinds fall back to `uint64`.
    pub fn unsigned(kind: ScalarKind, v: u64) -> Self {
        let kind = if kind.is_unsigned() {
            kind
        } else {
            ScalarKind::Uint64
        };
        Self {
            kind,
            name: None,
            literal: Literal::Uint(v),
        }
    }

    /// A float of the given kind. Non-float kinds fall back to `float64`.
    pub fn float(kind: ScalarKind, v: f64) -> Self {
        let kind = if kind.is_float() {
            kind
        } else {
            ScalarKind::Float64
        };
        Self {
            kind,
            name: None,
            literal: Literal::Float(v),
        }
    }

    /// Attach a declared type name (e.g., `metav1.Duration` over `int64`).
    pub fn named(mut self, name: TypeName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub fn name(&self) -> Option<&TypeName> {
        self.name.as_ref()
    }

    pub fn literal(&self) -> &Literal {
        &self.literal
    }

    pub fn ty(&self) -> TypeDesc {
        TypeDesc::Scalar {
            kind: self.kind,
            name: self.name.clone(),
        }
    }

    /// Zero for its kind. `-0.0` is not zero, matching bitwise float comparison.
    pub fn is_zero(&self) -> bool {
        match &self.literal {
            Literal::Bool(v) => !v,
            Literal::Int(v) => *v == 0,
            Literal::Uint(v) => *v == 0,
            Literal::Float(v) => v.to_bits() == 0,
            Literal::String(v) => v.is_empty(),
        }
    }
}

/// Whether a field can be set from outside its declaring package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Exported,
    Private,
}

/// A struct field with its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Value,
    pub visibility: Visibility,
    /// Declared without a field name (struct embedding).
    pub embedded: bool,
}

impl Field {
    pub fn exported(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            visibility: Visibility::Exported,
            embedded: false,
        }
    }

    pub fn private(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            visibility: Visibility::Private,
            embedded: false,
        }
    }

    /// An embedded field; its name is the embedded type's local name.
    pub fn embedded(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            visibility: Visibility::Exported,
            embedded: true,
        }
    }

    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }
}

/// Text encoding used by a [`Codec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecFormat {
    Json,
}

/// An encoded snapshot of a record whose type supports an encode/decode round trip.
///
/// Records that keep state in private fields can still be reproduced by
/// embedding this text and decoding it at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Codec {
    format: CodecFormat,
    encoded: Result<String, String>,
}

impl Codec {
    /// Encode `value` as JSON. The `DeserializeOwned` bound is the decode half
    /// of the round trip; without it the type does not qualify.
    pub fn json<T>(value: &T) -> Self
    where
        T: Serialize + DeserializeOwned,
    {
        Self {
            format: CodecFormat::Json,
            encoded: serde_json::to_string(value).map_err(|e| e.to_string()),
        }
    }

    pub fn format(&self) -> CodecFormat {
        self.format
    }

    /// The encoded text, or the encoder's error message.
    pub fn encoded(&self) -> Result<&str, &str> {
        self.encoded.as_deref().map_err(String::as_str)
    }
}

/// A struct value.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// `None` for anonymous struct types.
    pub name: Option<TypeName>,
    pub fields: Vec<Field>,
    pub codec: Option<Codec>,
}

impl Record {
    /// Start a record of a named struct type.
    pub fn named(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: Some(TypeName::new(package, name)),
            fields: Vec::new(),
            codec: None,
        }
    }

    /// Start a record of an anonymous struct type; the type is spelled from its fields.
    pub fn anonymous() -> Self {
        Self {
            name: None,
            fields: Vec::new(),
            codec: None,
        }
    }

    /// Add an exported field.
    pub fn field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.push(Field::exported(name, value));
        self
    }

    /// Add a private field.
    pub fn private(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.push(Field::private(name, value));
        self
    }

    /// Add an embedded field.
    pub fn embed(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.push(Field::embedded(name, value));
        self
    }

    pub fn with_codec(mut self, codec: Codec) -> Self {
        self.codec = Some(codec);
        self
    }

    pub fn struct_type(&self) -> StructType {
        match &self.name {
            Some(name) => StructType::Named(name.clone()),
            None => StructType::Anonymous(
                self.fields
                    .iter()
                    .map(|f| FieldType {
                        name: f.name.clone(),
                        ty: f.value.ty(),
                        visibility: f.visibility,
                        embedded: f.embedded,
                    })
                    .collect(),
            ),
        }
    }

    pub fn has_private_fields(&self) -> bool {
        self.fields.iter().any(Field::is_private)
    }

    pub fn is_zero(&self) -> bool {
        self.fields.iter().all(|f| f.value.is_zero())
    }
}

/// A value in shape form.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(ScalarValue),
    /// A pointer; `target` is `None` for nil.
    Pointer {
        elem: TypeDesc,
        target: Option<Box<Value>>,
    },
    /// A slice or fixed-length array; `ty` is the full collection type.
    List { ty: TypeDesc, items: Vec<Value> },
    /// A map; `ty` is the full map type.
    Map {
        ty: TypeDesc,
        entries: Vec<(Value, Value)>,
    },
    Record(Record),
    /// A live channel with the given element type.
    Chan(TypeDesc),
    /// A function value.
    Func,
}

impl Value {
    pub fn bool(v: bool) -> Self {
        Self::Scalar(ScalarValue::bool(v))
    }

    pub fn string(v: impl Into<String>) -> Self {
        Self::Scalar(ScalarValue::string(v))
    }

    /// A non-nil pointer to `target`.
    pub fn pointer_to(target: Value) -> Self {
        Self::Pointer {
            elem: target.ty(),
            target: Some(Box::new(target)),
        }
    }

    /// A nil pointer to `elem`.
    pub fn nil(elem: TypeDesc) -> Self {
        Self::Pointer { elem, target: None }
    }

    pub fn slice(elem: TypeDesc, items: Vec<Value>) -> Self {
        Self::List {
            ty: TypeDesc::slice(elem),
            items,
        }
    }

    /// A fixed-length array whose length is the number of items.
    pub fn array(elem: TypeDesc, items: Vec<Value>) -> Self {
        Self::List {
            ty: TypeDesc::array(items.len(), elem),
            items,
        }
    }

    pub fn map(key: TypeDesc, value: TypeDesc, entries: Vec<(Value, Value)>) -> Self {
        Self::Map {
            ty: TypeDesc::map(key, value),
            entries,
        }
    }

    /// Reconstruct the full type of this value.
    pub fn ty(&self) -> TypeDesc {
        match self {
            Self::Scalar(s) => s.ty(),
            Self::Pointer { elem, .. } => TypeDesc::Pointer(Box::new(elem.clone())),
            Self::List { ty, .. } | Self::Map { ty, .. } => ty.clone(),
            Self::Record(r) => TypeDesc::Struct(r.struct_type()),
            Self::Chan(elem) => TypeDesc::Chan(Box::new(elem.clone())),
            Self::Func => TypeDesc::Func,
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::Scalar(_) => Kind::Scalar,
            Self::Pointer { .. } => Kind::Pointer,
            Self::List { ty, .. } => ty.kind(),
            Self::Map { .. } => Kind::Map,
            Self::Record(_) => Kind::Struct,
            Self::Chan(_) => Kind::Chan,
            Self::Func => Kind::Func,
        }
    }

    /// Whether this value equals the zero value of its type.
    ///
    /// Slices and maps have no nil/empty distinction here: an empty one is zero.
    /// Arrays are zero when every element is.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_zero(),
            Self::Pointer { target, .. } => target.is_none(),
            Self::List { ty, items } => match ty {
                TypeDesc::Array { .. } => items.iter().all(Value::is_zero),
                _ => items.is_empty(),
            },
            Self::Map { entries, .. } => entries.is_empty(),
            Self::Record(r) => r.is_zero(),
            Self::Chan(_) | Self::Func => false,
        }
    }
}

impl From<ScalarValue> for Value {
    fn from(v: ScalarValue) -> Self {
        Self::Scalar(v)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Self::Record(r)
    }
}
