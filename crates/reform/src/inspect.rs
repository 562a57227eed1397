use itertools::Itertools;
use time::format_description::well_known::Rfc3339;

use crate::value::Value;

/// Render a query argument for logs.
///
/// Strings and blobs are quoted so that empty values and trailing whitespace stay visible.
pub fn inspect(value: &Value, add_type: bool) -> String {
    let mut s = match value {
        Value::Null => "<nil>".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Text(t) => format!("{:?}", t),
        Value::Blob(b) => format!("{:?}", String::from_utf8_lossy(b)),
        Value::Timestamp(t) => t.format(&Rfc3339).unwrap_or_else(|_| t.to_string()),
    };

    if add_type {
        s.push_str(&format!(" ({})", value.kind()));
    }

    s
}

/// Render an argument list as `[a, b, c]`.
pub fn inspect_args(args: &[Value], add_types: bool) -> String {
    format!("[{}]", args.iter().map(|a| inspect(a, add_types)).join(", "))
}
