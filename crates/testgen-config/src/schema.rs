use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::TestgenConfig;

/// JSON schema for `testgen.toml`, for editor TOML integrations and CI validation.
#[must_use]
pub fn json_schema() -> RootSchema {
    schema_for!(TestgenConfig)
}

/// [`json_schema`] as pretty-printed JSON.
pub fn json_schema_string() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json_schema())
}
