//! String-enum schema rewriting.
//!
//! The API serializes these enums by name (string-enum converter), but the
//! generator describes them as integer-backed. Each known schema under
//! `components.schemas` is replaced wholesale with a string enum.
use serde_json::{Value, json};
use tracing::debug;

/// A schema the API sends as string literals, with its allowed values in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringEnum {
    pub schema: &'static str,
    pub values: &'static [&'static str],
}

pub const STRING_ENUMS: &[StringEnum] = &[
    StringEnum {
        schema: "DailyCommitmentStatus",
        values: &["Committed", "Completed", "Dismissed", "Missed"],
    },
    StringEnum {
        schema: "TaskItemStatus",
        values: &["Pending", "InProgress", "Completed", "Cancelled"],
    },
    StringEnum {
        schema: "ProofIntensity",
        values: &["Easy", "Moderate", "Hard"],
    },
];

impl StringEnum {
    /// `{"type": "string", "enum": [...]}`, nothing else.
    pub fn to_schema(&self) -> Value {
        json!({
            "type": "string",
            "enum": self.values,
        })
    }
}

pub fn lookup(schema: &str) -> Option<&'static StringEnum> {
    STRING_ENUMS.iter().find(|known| known.schema == schema)
}

/// Replace every known enum schema present in `components.schemas`.
///
/// Returns the names that were rewritten, in table order. A document without
/// `components.schemas` has nothing to fix and is left as-is.
pub fn rewrite_enums(spec: &mut Value) -> Vec<&'static str> {
    let Some(schemas) = spec
        .get_mut("components")
        .and_then(|c| c.get_mut("schemas"))
        .and_then(Value::as_object_mut)
    else {
        return Vec::new();
    };

    let mut rewritten = Vec::new();
    for known in STRING_ENUMS {
        if let Some(schema) = schemas.get_mut(known.schema) {
            *schema = known.to_schema();
            debug!(schema = known.schema, values = known.values.len(), "rewrote string enum");
            rewritten.push(known.schema);
        }
    }
    rewritten
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_item_status_becomes_string_enum() {
        let mut spec = json!({
            "components": {"schemas": {
                "TaskItemStatus": {"type": "integer", "enum": [0, 1, 2, 3]}
            }}
        });
        assert_eq!(rewrite_enums(&mut spec), ["TaskItemStatus"]);
        assert_eq!(
            spec["components"]["schemas"]["TaskItemStatus"],
            json!({"type": "string", "enum": ["Pending", "InProgress", "Completed", "Cancelled"]})
        );
    }

    #[test]
    fn previous_fields_are_discarded() {
        let mut spec = json!({
            "components": {"schemas": {
                "ProofIntensity": {
                    "type": "integer",
                    "format": "int32",
                    "description": "How hard the proof is",
                    "nullable": true,
                    "enum": [0, 1, 2]
                }
            }}
        });
        rewrite_enums(&mut spec);
        let schema = spec["components"]["schemas"]["ProofIntensity"].as_object().unwrap();
        let keys: Vec<&str> = schema.keys().map(String::as_str).collect();
        assert_eq!(keys, ["type", "enum"]);
        assert_eq!(schema["enum"], json!(["Easy", "Moderate", "Hard"]));
    }

    #[test]
    fn all_known_enums_rewritten_in_table_order() {
        let mut spec = json!({
            "components": {"schemas": {
                "ProofIntensity": {"type": "integer"},
                "DailyCommitmentStatus": {"type": "integer"},
                "TaskItemStatus": {"type": "integer"}
            }}
        });
        let rewritten = rewrite_enums(&mut spec);
        assert_eq!(rewritten, ["DailyCommitmentStatus", "TaskItemStatus", "ProofIntensity"]);
        for known in STRING_ENUMS {
            assert_eq!(spec["components"]["schemas"][known.schema], known.to_schema());
        }
        assert_eq!(
            spec["components"]["schemas"]["DailyCommitmentStatus"]["enum"],
            json!(["Committed", "Completed", "Dismissed", "Missed"])
        );
    }

    #[test]
    fn unknown_schemas_are_untouched() {
        let goal = json!({"type": "object", "properties": {"status": {"$ref": "#/components/schemas/TaskItemStatus"}}});
        let mut spec = json!({
            "components": {"schemas": {
                "Goal": goal.clone(),
                "TaskItemStatus": {"type": "integer"}
            }}
        });
        rewrite_enums(&mut spec);
        assert_eq!(spec["components"]["schemas"]["Goal"], goal);
    }

    #[test]
    fn missing_components_or_schemas_is_a_no_op() {
        for doc in [
            json!({"openapi": "3.0.1"}),
            json!({"components": {}}),
            json!({"components": {"schemas": []}}),
            json!({"components": "nope"}),
            json!([1, 2, 3]),
        ] {
            let mut spec = doc.clone();
            assert!(rewrite_enums(&mut spec).is_empty());
            assert_eq!(spec, doc);
        }
    }

    #[test]
    fn absent_table_entries_are_skipped() {
        let mut spec = json!({"components": {"schemas": {"Goal": {"type": "object"}}}});
        assert!(rewrite_enums(&mut spec).is_empty());
        assert_eq!(spec, json!({"components": {"schemas": {"Goal": {"type": "object"}}}}));
    }

    #[test]
    fn lookup_finds_known_names_only() {
        assert_eq!(lookup("ProofIntensity").map(|e| e.values), Some(&["Easy", "Moderate", "Hard"][..]));
        assert!(lookup("proofintensity").is_none());
        assert!(lookup("Goal").is_none());
    }
}
