//! Domain Layer
//!
//! Pure provisioning concepts without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Task definition document, resource ledger
//! - `value_objects/` - Protocol, pipeline steps, deterministic names
//! - `services/` - Instance bootstrap script
//! - `ports/` - Converter, resource client and event sink traits
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or talks to the provider
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
