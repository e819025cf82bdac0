//! Rendering field-type lists into canonical signature strings.

/// Canonical tuple descriptor for a list of member types: `(t1,t2,...,tk)`.
pub fn tuple_type(types: &[String]) -> String {
    format!("({})", types.join(","))
}

/// Renders the signature addressed to a codec: a single type is unwrapped,
/// anything else (including the empty list) is rendered as a tuple.
pub fn render_signature(types: &[String]) -> String {
    match types {
        [single] => single.clone(),
        _ => tuple_type(types),
    }
}
