//! Property tests for ecs-launch.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "only the identity fields
//! change".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/naming.rs"]
mod naming;

#[path = "properties/task_definition.rs"]
mod task_definition;
