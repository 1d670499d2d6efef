use crate::{event::NameEvent, Result};

pub struct JsonSerializer;

impl JsonSerializer {
    /// Encodes an event as a compact JSON object with the wire field names.
    pub fn serialize(event: &NameEvent) -> Result<String> {
        serde_json::to_string(event).map_err(Into::into)
    }
}
