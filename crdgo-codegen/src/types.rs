//! Go type expressions.

use crdgo_ir::{StructType, TypeDesc};

use crate::{imports::ImportScope, serializer::GapReason};

/// Render the Go spelling of a type.
///
/// Named types are qualified through `scope`, which records the import.
/// Function types have no literal form and are rejected, including as a
/// channel element.
pub fn render_type(ty: &TypeDesc, scope: &mut ImportScope<'_>) -> Result<String, GapReason> {
    Ok(match ty {
        TypeDesc::Scalar { kind, name } => match name {
            Some(name) => scope.qualify(&name.package, &name.name),
            None => kind.as_str().to_string(),
        },
        TypeDesc::Pointer(elem) => format!("*{}", render_type(elem, scope)?),
        TypeDesc::Slice(elem) => format!("[]{}", render_type(elem, scope)?),
        TypeDesc::Array { len, elem } => format!("[{}]{}", len, render_type(elem, scope)?),
        TypeDesc::Map { key, value } => format!(
            "map[{}]{}",
            render_type(key, scope)?,
            render_type(value, scope)?
        ),
        TypeDesc::Struct(StructType::Named(name)) => scope.qualify(&name.package, &name.name),
        TypeDesc::Struct(StructType::Anonymous(fields)) => {
            if fields.is_empty() {
                return Ok("struct{}".to_string());
            }
            let mut decls = Vec::with_capacity(fields.len());
            for field in fields {
                let ty = render_type(&field.ty, scope)?;
                if field.embedded {
                    decls.push(ty);
                } else {
                    decls.push(format!("{} {}", field.name, ty));
                }
            }
            format!("struct {{ {} }}", decls.join("; "))
        }
        TypeDesc::Chan(elem) => format!("chan {}", render_type(elem, scope)?),
        TypeDesc::Func => return Err(GapReason::Function),
    })
}
