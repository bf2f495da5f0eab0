//! Boolean alias canonicalization

/// The closed boolean value space, also the default suggestion set.
pub const DEFAULT_BOOLEAN_VALUES: [&str; 2] = ["true", "false"];

/// Canonicalize a `BOOLEAN` filter value.
///
/// Recognized aliases map onto `true`/`false`; anything else maps to the
/// head of the default set. Boolean has no rejection path because the
/// value space is closed.
pub fn clean_boolean(value: &str) -> String {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => "true".to_string(),
        "false" | "0" | "no" | "off" => "false".to_string(),
        _ => DEFAULT_BOOLEAN_VALUES[0].to_string(),
    }
}
