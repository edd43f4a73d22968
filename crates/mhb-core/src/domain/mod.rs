//! Core domain types.
//!
//! These types represent the pure domain model, independent of where the
//! descriptors come from (built-in apps or a loaded config document).
//!
//! # Structure
//!
//! - `descriptor` - `CommandDescriptor`, its unvalidated `CommandEntry` form,
//!   and the `DescriptorSource` seam
//! - `registry` - `CommandRegistry` and `RegistryBuilder`
//! - `error` - Descriptor and registry errors

mod descriptor;
mod error;
mod registry;

pub use descriptor::{CommandDescriptor, CommandEntry, DescriptorSource};
pub use error::{DescriptorError, DescriptorField, RegistryError};
pub use registry::{CommandRegistry, RegistryBuilder};
