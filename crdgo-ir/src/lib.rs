//! Shape representation for values that crdgo turns into Go source.
//!
//! Every value handed to the serializer is first lowered into the closed
//! [`Value`] union, whose variants mirror the shape categories of the target
//! language: scalars, pointers, slices and arrays, maps, records (structs),
//! and the channel/function shapes the serializer refuses to emit.
//!
//! # Architecture
//!
//! ```text
//! descriptor (Rust struct) → Reflect::reflect → Value → crdgo-codegen → Go literal
//! ```
//!
//! Lowering happens once, from each type's own static description
//! ([`Reflect::type_desc`]), so the serializer never inspects types at runtime.

mod reflect;
mod types;
mod value;

pub use reflect::Reflect;
pub use types::{FieldType, Kind, ScalarKind, StructType, TypeDesc, TypeName};
pub use value::{Codec, CodecFormat, Field, Literal, Record, ScalarValue, Value, Visibility};
