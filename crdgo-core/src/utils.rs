//! Shared utility functions for code generation.

/// Uppercase the first character if it is an ASCII lowercase letter
/// (e.g., "v1beta1" -> "V1beta1", "int32" -> "Int32")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}

/// Strip a vendoring prefix from a package path
/// (e.g., "example.com/app/vendor/k8s.io/api/core/v1" -> "k8s.io/api/core/v1")
pub fn non_vendor_path(path: &str) -> &str {
    const VENDOR: &str = "/vendor/";
    match path.rfind(VENDOR) {
        Some(idx) => &path[idx + VENDOR.len()..],
        None => path,
    }
}
