use crate::fragment::FragmentMap;

/// Serialize as minified JSON (no whitespace).
pub fn to_minified_json(map: &FragmentMap) -> Result<String, serde_json::Error> {
    serde_json::to_string(map)
}

/// Serialize as pretty JSON (for debugging).
pub fn to_pretty_json(map: &FragmentMap) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(map)
}
