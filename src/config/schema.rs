//! JSON Schema validation for pkgprep configuration

use anyhow::{Result, anyhow};
use jsonschema::{Draft, Validator};
use serde_json::Value;

/// Get the embedded JSON schema for pkgprep configuration
pub fn get_schema() -> Result<Validator> {
    let schema_str = include_str!("../../docs/schema.json");
    let schema: Value = serde_json::from_str(schema_str)
        .map_err(|e| anyhow!("Failed to parse embedded JSON schema: {}", e))?;

    jsonschema::options()
        .with_draft(Draft::Draft7)
        .build(&schema)
        .map_err(|e| anyhow!("Failed to compile JSON schema: {}", e))
}

/// Validate a configuration value against the schema
pub fn validate_against_schema(config: &Value) -> Result<()> {
    let schema = get_schema()?;

    let error_messages: Vec<String> = schema
        .iter_errors(config)
        .map(|e| format!("  - Path '{}': {}", e.instance_path, e))
        .collect();

    if !error_messages.is_empty() {
        return Err(anyhow!(
            "Configuration validation failed:\n{}",
            error_messages.join("\n")
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_compiles() {
        assert!(get_schema().is_ok());
    }

    #[test]
    fn test_minimal_config_passes() {
        let value = json!({"datadir": "/data", "info_files": ["packages.yml"], "custom_preprocess": []});
        assert!(validate_against_schema(&value).is_ok());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let value = json!({"datadir": "/data", "info_files": [], "custom_preprocess": [], "bogus": 1});
        assert!(validate_against_schema(&value).is_err());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let value = json!({"datadir": "/data", "info_files": "packages.yml", "custom_preprocess": []});
        assert!(validate_against_schema(&value).is_err());
    }
}
