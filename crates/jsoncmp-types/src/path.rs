//! Dotted paths.
//!
//! A path is the `.`-joined sequence of object keys leading to a value. Array
//! indices never appear in a path: arrays are leaves. Keys are joined verbatim,
//! so a key that itself contains `.` aliases the nested form (`{"a.b": 1}` and
//! `{"a": {"b": 1}}` both produce the path `a.b`).

/// The path of the document root.
pub const ROOT_PATH: &str = "";

/// Append `key` to `parent`. Joining onto the root yields the bare key.
pub fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Number of segments in `path`. The root path has depth 0.
pub fn path_depth(path: &str) -> usize {
    if path.is_empty() {
        0
    } else {
        path.split('.').count()
    }
}

/// The last segment of `path`, or the root path itself.
pub fn leaf_key(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}
