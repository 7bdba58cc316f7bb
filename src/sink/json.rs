//! JSON rendering.

use std::io::Write;

use serde_json::{Map, Value};

use super::{FieldValue, ResultSink};

/// Collects fields into a single JSON object; errors go under `errors`.
#[derive(Debug, Default)]
pub struct JsonSink {
    fields: Map<String, Value>,
    errors: Vec<String>,
}

impl JsonSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected object.
    pub fn to_value(&self) -> Value {
        let mut object = self.fields.clone();
        if !self.errors.is_empty() {
            object.insert(
                "errors".to_string(),
                Value::from(self.errors.clone()),
            );
        }
        Value::Object(object)
    }

    /// Writes the collected object as pretty-printed JSON.
    pub fn write_to(&self, mut out: impl Write) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut out, &self.to_value())?;
        writeln!(out)?;
        Ok(())
    }
}

impl ResultSink for JsonSink {
    fn set_field(&mut self, name: &str, value: FieldValue) {
        let value = match value {
            FieldValue::Text(text) => Value::String(text),
            FieldValue::List(items) => Value::from(items),
        };
        self.fields.insert(name.to_string(), value);
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
