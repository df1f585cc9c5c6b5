//! Type descriptors.
//!
//! A [`TypeDesc`] is the static shape of a value as the target language sees
//! it. Named types (structs and named scalars) carry the package path they are
//! declared in, which is what the import registry turns into an alias.

use std::fmt;

use crate::value::Visibility;

/// Primitive kinds of the target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    String,
}

impl ScalarKind {
    /// Get the kind name as spelled in source (e.g., "int32", "uintptr").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
        }
    }

    /// Returns true for the signed integer kinds.
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            Self::Int | Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64
        )
    }

    /// Returns true for the unsigned integer kinds, including `uintptr`.
    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            Self::Uint | Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64 | Self::Uintptr
        )
    }

    /// Returns true for `float32` and `float64`.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared type: the package it lives in and its local name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName {
    /// Package (namespace) path, e.g. `k8s.io/apimachinery/pkg/apis/meta/v1`.
    pub package: String,
    /// Local name within the package, e.g. `ObjectMeta`.
    pub name: String,
}

impl TypeName {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.package, self.name)
    }
}

/// Shape category of a type, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Scalar,
    Pointer,
    Slice,
    Array,
    Map,
    Struct,
    Chan,
    Func,
}

/// Static description of a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDesc {
    /// A primitive, or a named type whose underlying type is primitive.
    Scalar {
        kind: ScalarKind,
        name: Option<TypeName>,
    },
    /// `*T`
    Pointer(Box<TypeDesc>),
    /// `[]T`
    Slice(Box<TypeDesc>),
    /// `[N]T`
    Array { len: usize, elem: Box<TypeDesc> },
    /// `map[K]V`
    Map {
        key: Box<TypeDesc>,
        value: Box<TypeDesc>,
    },
    /// A named or anonymous struct.
    Struct(StructType),
    /// `chan T`
    Chan(Box<TypeDesc>),
    /// Any function type.
    Func,
}

impl TypeDesc {
    /// A primitive scalar type.
    pub fn scalar(kind: ScalarKind) -> Self {
        Self::Scalar { kind, name: None }
    }

    /// A named type declared over a primitive (e.g., `type ResourceScope string`).
    pub fn named_scalar(kind: ScalarKind, name: TypeName) -> Self {
        Self::Scalar {
            kind,
            name: Some(name),
        }
    }

    pub fn pointer(elem: TypeDesc) -> Self {
        Self::Pointer(Box::new(elem))
    }

    pub fn slice(elem: TypeDesc) -> Self {
        Self::Slice(Box::new(elem))
    }

    pub fn array(len: usize, elem: TypeDesc) -> Self {
        Self::Array {
            len,
            elem: Box::new(elem),
        }
    }

    pub fn map(key: TypeDesc, value: TypeDesc) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// A named struct type.
    pub fn named_struct(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Struct(StructType::Named(TypeName::new(package, name)))
    }

    pub fn chan(elem: TypeDesc) -> Self {
        Self::Chan(Box::new(elem))
    }

    /// Get the shape category.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Scalar { .. } => Kind::Scalar,
            Self::Pointer(_) => Kind::Pointer,
            Self::Slice(_) => Kind::Slice,
            Self::Array { .. } => Kind::Array,
            Self::Map { .. } => Kind::Map,
            Self::Struct(_) => Kind::Struct,
            Self::Chan(_) => Kind::Chan,
            Self::Func => Kind::Func,
        }
    }

    /// Returns true for scalar types, named or not.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar { .. })
    }

    /// Get the declared name for named scalars and named structs.
    pub fn type_name(&self) -> Option<&TypeName> {
        match self {
            Self::Scalar { name, .. } => name.as_ref(),
            Self::Struct(StructType::Named(name)) => Some(name),
            _ => None,
        }
    }
}

/// A struct type: either declared with a name or spelled inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructType {
    Named(TypeName),
    Anonymous(Vec<FieldType>),
}

/// A field of an anonymous struct type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    pub name: String,
    pub ty: TypeDesc,
    pub visibility: Visibility,
    pub embedded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_kind_families() {
        assert!(ScalarKind::Int8.is_signed());
        assert!(!ScalarKind::Int8.is_unsigned());
        assert!(ScalarKind::Uintptr.is_unsigned());
        assert!(ScalarKind::Float32.is_float());
        assert!(!ScalarKind::String.is_float());
        assert_eq!(ScalarKind::Uintptr.to_string(), "uintptr");
    }

    #[test]
    fn test_type_desc_kind() {
        let ty = TypeDesc::map(
            TypeDesc::scalar(ScalarKind::String),
            TypeDesc::slice(TypeDesc::pointer(TypeDesc::named_struct("a/b", "C"))),
        );
        assert_eq!(ty.kind(), Kind::Map);
        assert_eq!(TypeDesc::Func.kind(), Kind::Func);
        assert_eq!(TypeDesc::array(3, TypeDesc::Func).kind(), Kind::Array);
    }

    #[test]
    fn test_type_name() {
        let scope = TypeName::new("k8s.io/x/v1", "ResourceScope");
        let ty = TypeDesc::named_scalar(ScalarKind::String, scope.clone());
        assert_eq!(ty.type_name(), Some(&scope));
        assert!(ty.is_scalar());
        assert_eq!(TypeDesc::scalar(ScalarKind::Bool).type_name(), None);
        assert_eq!(scope.to_string(), "k8s.io/x/v1.ResourceScope");
    }
}
