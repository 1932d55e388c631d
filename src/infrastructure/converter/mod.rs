//! Task converter implementations

mod container_transform;

pub use container_transform::ContainerTransformConverter;
