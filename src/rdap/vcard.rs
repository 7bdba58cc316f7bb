//! jCard (`vcardArray`) helpers.

use serde_json::Value;

/// Formatted name (`fn` property) of a jCard.
///
/// Expects `["vcard", [[name, params, type, value], ...]]` and returns the
/// value of the first `fn` row. Any other shape yields `None`.
pub fn vcard_formatted_name(vcard: Option<&Value>) -> Option<String> {
    let properties = vcard?.as_array()?.get(1)?.as_array()?;
    properties
        .iter()
        .filter_map(Value::as_array)
        .find(|row| row.first().and_then(Value::as_str) == Some("fn"))
        .and_then(|row| row.get(3))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
