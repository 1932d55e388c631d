//! Property tests for task definition validation and identity injection.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use ecs_launch::domain::entities::TaskDefinition;

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map("[a-zA-Z]{1,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn container() -> impl Strategy<Value = Value> {
    ("[a-z][a-z0-9-]{0,10}", "[a-z]{1,8}:[a-z0-9.]{1,6}", 1u16..=65535).prop_map(
        |(name, image, port)| {
            json!({
                "name": name,
                "image": image,
                "portMappings": [{ "containerPort": port }]
            })
        },
    )
}

fn task_document() -> impl Strategy<Value = Value> {
    (
        proptest::collection::vec(container(), 1..5),
        proptest::collection::btree_map("[a-z]{1,8}", json_leaf(), 0..4),
    )
        .prop_map(|(containers, extra)| {
            let mut document: Map<String, Value> = extra.into_iter().collect();
            document.insert("containerDefinitions".to_string(), Value::Array(containers));
            Value::Object(document)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: shape validation never panics on arbitrary JSON.
    #[test]
    fn property_from_document_never_panics(value in json_value()) {
        let _ = TaskDefinition::from_document(value);
    }

    /// PROPERTY: injection sets family and task role and leaves every other
    /// field exactly as the converter produced it.
    #[test]
    fn property_inject_identity_touches_only_identity_fields(
        document in task_document(),
        family in "[A-Za-z0-9_-]{1,32}",
        role in "(arn:aws:iam::[0-9]{12}:role/[a-z]{1,10})?",
    ) {
        let mut definition = TaskDefinition::from_document(document.clone()).unwrap();
        let containers_before = definition.container_count();

        definition.inject_identity(&family, &role);

        prop_assert_eq!(definition.family(), Some(family.as_str()));
        prop_assert_eq!(definition.task_role_arn(), Some(role.as_str()));
        prop_assert_eq!(definition.container_count(), containers_before);

        let before = document.as_object().unwrap();
        for (key, value) in definition.as_document() {
            if key == "family" || key == "taskRoleArn" {
                continue;
            }
            prop_assert_eq!(before.get(key), Some(value));
        }
    }

    /// PROPERTY: every generated container is found by name.
    #[test]
    fn property_container_names_are_discoverable(document in task_document()) {
        let definition = TaskDefinition::from_document(document.clone()).unwrap();

        for container in document["containerDefinitions"].as_array().unwrap() {
            let name = container["name"].as_str().unwrap();
            prop_assert!(definition.has_container(name));
        }
    }
}
