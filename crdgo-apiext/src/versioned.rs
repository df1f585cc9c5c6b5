//! Reflection for types declared identically in several Go packages.

use std::collections::BTreeMap;

use crdgo_ir::{Reflect, ScalarValue, TypeDesc, TypeName, Value};

/// A type whose Go declaration is repeated verbatim in each API version
/// package. The package is supplied by the enclosing descriptor, so one Rust
/// type serves both `v1` and `v1beta1`.
pub trait Versioned {
    fn type_desc_in(package: &str) -> TypeDesc
    where
        Self: Sized;

    fn reflect_in(&self, package: &str) -> Value;
}

impl<T: Versioned> Versioned for Option<T> {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::pointer(T::type_desc_in(package))
    }

    fn reflect_in(&self, package: &str) -> Value {
        match self {
            Some(inner) => Value::Pointer {
                elem: T::type_desc_in(package),
                target: Some(Box::new(inner.reflect_in(package))),
            },
            None => Value::nil(T::type_desc_in(package)),
        }
    }
}

impl<T: Versioned> Versioned for Box<T> {
    fn type_desc_in(package: &str) -> TypeDesc {
        T::type_desc_in(package)
    }

    fn reflect_in(&self, package: &str) -> Value {
        self.as_ref().reflect_in(package)
    }
}

impl<T: Versioned> Versioned for Vec<T> {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::slice(T::type_desc_in(package))
    }

    fn reflect_in(&self, package: &str) -> Value {
        Value::slice(
            T::type_desc_in(package),
            self.iter().map(|item| item.reflect_in(package)).collect(),
        )
    }
}

impl<T: Versioned> Versioned for BTreeMap<String, T> {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::map(String::type_desc(), T::type_desc_in(package))
    }

    fn reflect_in(&self, package: &str) -> Value {
        Value::map(
            String::type_desc(),
            T::type_desc_in(package),
            self.iter()
                .map(|(k, v)| (k.reflect(), v.reflect_in(package)))
                .collect(),
        )
    }
}

/// A string declared as a named Go type, e.g. `type ResourceScope string`.
pub(crate) fn named_string(package: &str, name: &str, value: &str) -> Value {
    ScalarValue::string(value)
        .named(TypeName::new(package, name))
        .into()
}
