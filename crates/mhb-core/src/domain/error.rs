//! Descriptor and registry error types.
//!
//! Both kinds are fatal to registry assembly: a registry is either fully
//! valid or not produced at all.

use std::fmt;

use thiserror::Error;

/// The three fields of a command descriptor, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorField {
    Name,
    Description,
    CommandToExecute,
}

impl DescriptorField {
    /// The camelCase key used in `config.json`.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::CommandToExecute => "commandToExecute",
        }
    }
}

impl fmt::Display for DescriptorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A descriptor could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// A required field was absent (only possible for loaded documents).
    #[error("missing required field `{0}`")]
    MissingField(DescriptorField),

    /// A field was present but empty or whitespace-only.
    #[error("field `{0}` must not be empty")]
    EmptyField(DescriptorField),

    /// A loaded entry carried nested `subCommands`, which a flat registry
    /// cannot represent.
    #[error("nested `subCommands` are not supported ({count} found)")]
    NestedCommands { count: usize },
}

/// Registry assembly failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two descriptors declare the same `name`.
    #[error("duplicate command name {name:?} (declared at positions {first} and {duplicate})")]
    DuplicateName {
        name: String,
        first: usize,
        duplicate: usize,
    },

    /// A source produced an invalid descriptor.
    #[error("malformed descriptor at position {index}: {source}")]
    Malformed {
        index: usize,
        source: DescriptorError,
    },
}
