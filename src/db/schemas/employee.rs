//! Employee document schema
//!
//! The shape is enforced server-side: the validator rejects writes that do
//! not match, even when they come from outside this application.

use bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::db::mongo::IntoValidator;

/// Collection name for employees
pub const EMPLOYEE_COLLECTION: &str = "employees";

/// Seniority level of an employee
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeLevel {
    Junior,
    Mid,
    Senior,
}

/// Employee document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EmployeeDoc {
    /// MongoDB document ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    /// Full name
    pub name: String,

    /// Job title, at least five characters
    pub position: String,

    /// Seniority level
    pub level: EmployeeLevel,
}

impl EmployeeDoc {
    /// Create a new employee document
    pub fn new(name: impl Into<String>, position: impl Into<String>, level: EmployeeLevel) -> Self {
        Self {
            _id: None,
            name: name.into(),
            position: position.into(),
            level,
        }
    }
}

impl IntoValidator for EmployeeDoc {
    fn into_validator() -> Document {
        doc! {
            "$jsonSchema": {
                "bsonType": "object",
                "required": ["name", "position", "level"],
                "additionalProperties": false,
                "properties": {
                    "_id": {},
                    "name": {
                        "bsonType": "string",
                        "description": "'name' is required and is a string",
                    },
                    "position": {
                        "bsonType": "string",
                        "description": "'position' is required and is a string",
                        "minLength": 5,
                    },
                    "level": {
                        "bsonType": "string",
                        "description": "'level' is required and is one of 'junior', 'mid', or 'senior'",
                        "enum": ["junior", "mid", "senior"],
                    },
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_requires_all_fields_and_forbids_extras() {
        let validator = EmployeeDoc::into_validator();
        let schema = validator.get_document("$jsonSchema").unwrap();

        let required: Vec<&str> = schema
            .get_array("required")
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["name", "position", "level"]);
        assert!(!schema.get_bool("additionalProperties").unwrap());
    }

    #[test]
    fn validator_constrains_position_and_level() {
        let validator = EmployeeDoc::into_validator();
        let props = validator
            .get_document("$jsonSchema")
            .unwrap()
            .get_document("properties")
            .unwrap();

        let position = props.get_document("position").unwrap();
        assert_eq!(position.get_i32("minLength").unwrap(), 5);

        let level = props.get_document("level").unwrap();
        let allowed: Vec<&str> = level
            .get_array("enum")
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(allowed, vec!["junior", "mid", "senior"]);
    }

    #[test]
    fn level_serializes_to_lowercase_wire_strings() {
        let employee = EmployeeDoc::new("Ada", "Engineer", EmployeeLevel::Senior);
        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(json["name"], "Ada");
        assert_eq!(json["position"], "Engineer");
        assert_eq!(json["level"], "senior");
        // _id is omitted until the store assigns one
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn unknown_level_is_rejected() {
        let result: Result<EmployeeDoc, _> =
            serde_json::from_str(r#"{"name":"Ada","position":"Engineer","level":"intern"}"#);
        assert!(result.is_err());
    }
}
