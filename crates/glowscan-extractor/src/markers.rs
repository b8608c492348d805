//! Marker identifiers and output key normalization

/// Script ids holding the JSON payloads of a Glowroot trace export, in output order
pub const DEFAULT_SCRIPT_IDS: [&str; 6] = [
    "headerJson",
    "entriesJson",
    "queriesJson",
    "sharedQueryTextsJson",
    "mainThreadProfileJson",
    "auxThreadProfileJson",
];

/// Derive an output key from a marker identifier.
///
/// Strips `suffix` when the identifier ends with it, then converts
/// `camelCase` to `snake_case`: `sharedQueryTextsJson` becomes `shared_query_texts`.
pub fn normalize_key(script_id: &str, suffix: &str) -> String {
    let stem = if suffix.is_empty() {
        script_id
    } else {
        script_id.strip_suffix(suffix).unwrap_or(script_id)
    };
    camel_to_snake(stem)
}

/// Convert `camelCase` to `snake_case`.
///
/// Every uppercase character after the first position gets a leading underscore,
/// so consecutive capitals are split individually (`ABc` becomes `a_bc`).
pub fn camel_to_snake(camel: &str) -> String {
    let mut snake = String::with_capacity(camel.len() + 4);
    for (i, ch) in camel.chars().enumerate() {
        if ch.is_uppercase() && i > 0 {
            snake.push('_');
        }
        snake.extend(ch.to_lowercase());
    }
    snake
}
