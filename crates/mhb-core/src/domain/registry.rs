//! The command registry and its validating builder.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use super::descriptor::{CommandDescriptor, DescriptorSource};
use super::error::{DescriptorError, RegistryError};

/// Ordered, immutable collection of command descriptors.
///
/// Cloning is cheap and shares the underlying storage; there is no way to
/// mutate a registry once built. Use [`CommandRegistry::to_vec`] for an
/// owned copy that can be modified freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRegistry {
    commands: Arc<[CommandDescriptor]>,
}

impl CommandRegistry {
    /// Start assembling a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Descriptors in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, CommandDescriptor> {
        self.commands.iter()
    }

    /// Descriptors as a slice, in declaration order.
    pub fn as_slice(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// Look up a descriptor by its `name`.
    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|c| c.name() == name)
    }

    /// Whether a command with this `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Command names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(CommandDescriptor::name)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Owned copy of the descriptors, detached from the registry.
    pub fn to_vec(&self) -> Vec<CommandDescriptor> {
        self.commands.to_vec()
    }
}

impl<'a> IntoIterator for &'a CommandRegistry {
    type Item = &'a CommandDescriptor;
    type IntoIter = std::slice::Iter<'a, CommandDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects descriptor sources in order and validates them on [`build`].
///
/// Source failures are recorded rather than raised immediately, so the
/// position reported in [`RegistryError::Malformed`] matches the order in
/// which sources were added.
///
/// [`build`]: RegistryBuilder::build
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    pending: Vec<Result<CommandDescriptor, DescriptorError>>,
}

impl RegistryBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already-validated descriptor.
    #[must_use]
    pub fn push(mut self, descriptor: CommandDescriptor) -> Self {
        self.pending.push(Ok(descriptor));
        self
    }

    /// Append the descriptor produced by `source`.
    #[must_use]
    pub fn source<S: DescriptorSource + ?Sized>(mut self, source: &S) -> Self {
        self.pending.push(source.descriptor());
        self
    }

    /// Append every source yielded by `sources`, in iteration order.
    #[must_use]
    pub fn extend<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: DescriptorSource,
    {
        self.pending
            .extend(sources.into_iter().map(|source| source.descriptor()));
        self
    }

    /// Number of sources added so far.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no sources have been added.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Validate all sources and assemble the registry.
    ///
    /// Sources are checked in order; the first malformed descriptor or
    /// repeated name aborts assembly and no registry is produced.
    pub fn build(self) -> Result<CommandRegistry, RegistryError> {
        let mut seen: HashMap<String, usize> = HashMap::with_capacity(self.pending.len());
        let mut commands = Vec::with_capacity(self.pending.len());

        for (index, pending) in self.pending.into_iter().enumerate() {
            let descriptor = pending.map_err(|source| RegistryError::Malformed { index, source })?;

            match seen.entry(descriptor.name().to_owned()) {
                Entry::Occupied(existing) => {
                    return Err(RegistryError::DuplicateName {
                        name: existing.key().clone(),
                        first: *existing.get(),
                        duplicate: index,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }

            tracing::trace!(name = descriptor.name(), index, "registered command");
            commands.push(descriptor);
        }

        tracing::debug!(count = commands.len(), "assembled command registry");

        Ok(CommandRegistry {
            commands: commands.into(),
        })
    }
}
