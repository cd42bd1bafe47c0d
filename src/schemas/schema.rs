use std::sync::Arc;

use schemars::schema::RootSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Cached JSON schema handle associated with a response type.
#[derive(Clone, Debug)]
pub struct SchemaHandle {
    schema_name: &'static str,
    schema_json: Arc<Value>,
}

impl SchemaHandle {
    pub fn from_root_schema(schema_name: &'static str, root: RootSchema) -> Self {
        let schema_json = serde_json::to_value(root).unwrap_or_else(|err| {
            panic!("failed to serialize schema for {}: {}", schema_name, err)
        });

        Self {
            schema_name,
            schema_json: Arc::new(schema_json),
        }
    }

    pub fn schema_name(&self) -> &'static str {
        self.schema_name
    }

    pub fn schema_json(&self) -> &Value {
        self.schema_json.as_ref()
    }
}

/// Response types that carry a derived JSON schema.
pub trait CompletionSchema: DeserializeOwned + Send + Sync + 'static {
    fn schema() -> &'static SchemaHandle;
}
