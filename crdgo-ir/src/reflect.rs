//! Conversion of Rust values into [`Value`] shape form.
//!
//! Descriptor types implement [`Reflect`] by hand; the implementations here
//! cover the primitive and container types they are built from.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::types::{ScalarKind, TypeDesc};
use crate::value::{ScalarValue, Value};

/// A type that can describe itself and its values in shape form.
pub trait Reflect {
    /// The static type of `Self`.
    fn type_desc() -> TypeDesc
    where
        Self: Sized;

    /// The value of `self` in shape form.
    fn reflect(&self) -> Value;
}

impl Reflect for bool {
    fn type_desc() -> TypeDesc {
        TypeDesc::scalar(ScalarKind::Bool)
    }

    fn reflect(&self) -> Value {
        Value::bool(*self)
    }
}

impl Reflect for String {
    fn type_desc() -> TypeDesc {
        TypeDesc::scalar(ScalarKind::String)
    }

    fn reflect(&self) -> Value {
        Value::string(self.as_str())
    }
}

macro_rules! reflect_int {
    ($($ty:ty => $kind:ident, $ctor:ident, $wide:ty);* $(;)?) => {
        $(
            impl Reflect for $ty {
                fn type_desc() -> TypeDesc {
                    TypeDesc::scalar(ScalarKind::$kind)
                }

                fn reflect(&self) -> Value {
                    Value::Scalar(ScalarValue::$ctor(ScalarKind::$kind, *self as $wide))
                }
            }
        )*
    };
}

reflect_int! {
    i8 => Int8, signed, i64;
    i16 => Int16, signed, i64;
    i32 => Int32, signed, i64;
    i64 => Int64, signed, i64;
    isize => Int, signed, i64;
    u8 => Uint8, unsigned, u64;
    u16 => Uint16, unsigned, u64;
    u32 => Uint32, unsigned, u64;
    u64 => Uint64, unsigned, u64;
    usize => Uintptr, unsigned, u64;
}

impl Reflect for f32 {
    fn type_desc() -> TypeDesc {
        TypeDesc::scalar(ScalarKind::Float32)
    }

    fn reflect(&self) -> Value {
        Value::Scalar(ScalarValue::float(ScalarKind::Float32, f64::from(*self)))
    }
}

impl Reflect for f64 {
    fn type_desc() -> TypeDesc {
        TypeDesc::scalar(ScalarKind::Float64)
    }

    fn reflect(&self) -> Value {
        Value::Scalar(ScalarValue::float(ScalarKind::Float64, *self))
    }
}

/// `Option<T>` is an optional pointer: `None` is nil.
impl<T: Reflect> Reflect for Option<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::pointer(T::type_desc())
    }

    fn reflect(&self) -> Value {
        match self {
            Some(inner) => Value::Pointer {
                elem: T::type_desc(),
                target: Some(Box::new(inner.reflect())),
            },
            None => Value::nil(T::type_desc()),
        }
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn type_desc() -> TypeDesc {
        T::type_desc()
    }

    fn reflect(&self) -> Value {
        self.as_ref().reflect()
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::slice(T::type_desc())
    }

    fn reflect(&self) -> Value {
        Value::slice(T::type_desc(), self.iter().map(Reflect::reflect).collect())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_desc() -> TypeDesc {
        TypeDesc::array(N, T::type_desc())
    }

    fn reflect(&self) -> Value {
        Value::List {
            ty: Self::type_desc(),
            items: self.iter().map(Reflect::reflect).collect(),
        }
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn type_desc() -> TypeDesc {
        TypeDesc::map(K::type_desc(), V::type_desc())
    }

    fn reflect(&self) -> Value {
        Value::map(
            K::type_desc(),
            V::type_desc(),
            self.iter().map(|(k, v)| (k.reflect(), v.reflect())).collect(),
        )
    }
}

impl<K: Reflect, V: Reflect> Reflect for IndexMap<K, V> {
    fn type_desc() -> TypeDesc {
        TypeDesc::map(K::type_desc(), V::type_desc())
    }

    fn reflect(&self) -> Value {
        Value::map(
            K::type_desc(),
            V::type_desc(),
            self.iter().map(|(k, v)| (k.reflect(), v.reflect())).collect(),
        )
    }
}
