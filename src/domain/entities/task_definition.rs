//! Task definition entity
//!
//! A provider-native task definition document as produced by the converter.
//! The document is kept as JSON so fields the converter emits pass through
//! to the provider untouched; only `family` and `taskRoleArn` are ever
//! written by this crate.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const CONTAINER_DEFINITIONS: &str = "containerDefinitions";
const FAMILY: &str = "family";
const TASK_ROLE_ARN: &str = "taskRoleArn";

/// Task definition document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct TaskDefinition {
    document: Map<String, Value>,
}

/// Why a document is not a task definition
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("document is not a JSON object")]
    NotAnObject,
    #[error("document has no 'containerDefinitions' field")]
    MissingContainerDefinitions,
    #[error("'containerDefinitions' is not an array")]
    ContainerDefinitionsNotAnArray,
    #[error("'containerDefinitions[{index}]' is not an object")]
    ContainerNotAnObject { index: usize },
}

impl TaskDefinition {
    /// Validate the shape of a converter document and wrap it.
    pub fn from_document(value: Value) -> Result<Self, ShapeError> {
        let Value::Object(document) = value else {
            return Err(ShapeError::NotAnObject);
        };

        let containers = document
            .get(CONTAINER_DEFINITIONS)
            .ok_or(ShapeError::MissingContainerDefinitions)?
            .as_array()
            .ok_or(ShapeError::ContainerDefinitionsNotAnArray)?;

        if let Some(index) = containers.iter().position(|c| !c.is_object()) {
            return Err(ShapeError::ContainerNotAnObject { index });
        }

        Ok(Self { document })
    }

    /// Container definitions, one per service of the composition file
    pub fn containers(&self) -> &[Value] {
        self.document
            .get(CONTAINER_DEFINITIONS)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn container_count(&self) -> usize {
        self.containers().len()
    }

    /// Names of the declared containers, in document order
    pub fn container_names(&self) -> Vec<&str> {
        self.containers()
            .iter()
            .filter_map(|c| c.get("name").and_then(Value::as_str))
            .collect()
    }

    pub fn has_container(&self, name: &str) -> bool {
        self.container_names().contains(&name)
    }

    pub fn family(&self) -> Option<&str> {
        self.document.get(FAMILY).and_then(Value::as_str)
    }

    pub fn task_role_arn(&self) -> Option<&str> {
        self.document.get(TASK_ROLE_ARN).and_then(Value::as_str)
    }

    /// Inject the family name and task role, overwriting whatever the
    /// converter produced for those two fields. Nothing else is touched.
    pub fn inject_identity(&mut self, family: &str, task_role_arn: &str) {
        self.document
            .insert(FAMILY.to_string(), Value::String(family.to_string()));
        self.document.insert(
            TASK_ROLE_ARN.to_string(),
            Value::String(task_role_arn.to_string()),
        );
    }

    pub fn as_document(&self) -> &Map<String, Value> {
        &self.document
    }

    pub fn into_document(self) -> Value {
        Value::Object(self.document)
    }
}

impl TryFrom<Value> for TaskDefinition {
    type Error = ShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_document(value)
    }
}

impl From<TaskDefinition> for Value {
    fn from(definition: TaskDefinition) -> Self {
        definition.into_document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn web_and_db() -> Value {
        json!({
            "family": "",
            "containerDefinitions": [
                {
                    "name": "web",
                    "image": "nginx:latest",
                    "memory": 128,
                    "portMappings": [{ "containerPort": 8080, "hostPort": 8080 }]
                },
                { "name": "db", "image": "postgres:16", "memory": 256 }
            ],
            "volumes": []
        })
    }

    #[test]
    fn from_document_accepts_converter_output() {
        let def = TaskDefinition::from_document(web_and_db()).unwrap();
        assert_eq!(def.container_count(), 2);
        assert_eq!(def.container_names(), vec!["web", "db"]);
        assert!(def.has_container("web"));
        assert!(!def.has_container("cache"));
    }

    #[test]
    fn from_document_rejects_non_object() {
        let err = TaskDefinition::from_document(json!([1, 2])).unwrap_err();
        assert_eq!(err, ShapeError::NotAnObject);
    }

    #[test]
    fn from_document_rejects_missing_containers() {
        let err = TaskDefinition::from_document(json!({ "family": "x" })).unwrap_err();
        assert_eq!(err, ShapeError::MissingContainerDefinitions);
    }

    #[test]
    fn from_document_rejects_non_array_containers() {
        let err =
            TaskDefinition::from_document(json!({ "containerDefinitions": "web" })).unwrap_err();
        assert_eq!(err, ShapeError::ContainerDefinitionsNotAnArray);
    }

    #[test]
    fn from_document_rejects_scalar_container() {
        let err = TaskDefinition::from_document(json!({
            "containerDefinitions": [{ "name": "web" }, 3]
        }))
        .unwrap_err();
        assert_eq!(err, ShapeError::ContainerNotAnObject { index: 1 });
    }

    #[test]
    fn inject_identity_sets_only_family_and_role() {
        let mut def = TaskDefinition::from_document(web_and_db()).unwrap();
        let before = def.as_document().clone();

        def.inject_identity("my-family", "arn:aws:iam::123:role/task");

        assert_eq!(def.family(), Some("my-family"));
        assert_eq!(def.task_role_arn(), Some("arn:aws:iam::123:role/task"));

        let after = def.as_document();
        for (key, value) in &before {
            if key != "family" && key != "taskRoleArn" {
                assert_eq!(after.get(key), Some(value), "field '{}' changed", key);
            }
        }
        assert_eq!(after.len(), before.len() + 1);
    }

    #[test]
    fn inject_identity_keeps_empty_role() {
        let mut def = TaskDefinition::from_document(web_and_db()).unwrap();
        def.inject_identity("fam", "");
        assert_eq!(def.task_role_arn(), Some(""));
    }

    #[test]
    fn serde_round_trip_validates_shape() {
        let parsed: Result<TaskDefinition, _> = serde_json::from_value(json!({ "a": 1 }));
        assert!(parsed.is_err());
    }
}
