//! Domain Layer
//!
//! This is the core of fnpilot - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (FunctionSpec, Environment, Alias)
//! - `value_objects/` - Immutable value types (VersionId, Runtime, NetworkPlacement)
//! - `services/` - Pure services (pagination, unreferenced version detection)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
