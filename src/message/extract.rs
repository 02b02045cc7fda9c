//! Locating a JSON object embedded in arbitrary model output.

use serde_json::{Deserializer, Value};

/// Returns the leftmost decodable JSON object in `text`.
///
/// The model may prepend commentary, wrap the object in code fences, or
/// append trailing prose, so every `{` offset is tried left to right with a
/// strict decoder that consumes a single value and ignores whatever follows
/// the matched span. The first offset that decodes to an object wins; arrays
/// and scalars at an offset do not qualify.
pub fn first_json_object(text: &str) -> Option<Value> {
    for (offset, _) in text.match_indices('{') {
        let mut stream = Deserializer::from_str(&text[offset..]).into_iter::<Value>();
        if let Some(Ok(value)) = stream.next() {
            if value.is_object() {
                return Some(value);
            }
        }
    }
    None
}
