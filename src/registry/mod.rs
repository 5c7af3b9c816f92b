//! Insertion-ordered option registry.
//!
//! Descriptors live in a `Vec` indexed by [`FlagId`]; an [`IndexMap`] maps
//! every alias (long and short name) to its descriptor, so iteration follows
//! first registration. Help rendering walks the aliases and keeps only the
//! first descriptor of each [`Descriptor::identity`], which shows a long and
//! short pair once.

mod descriptor;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use descriptor::{Descriptor, Flag, FlagId, Source};

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::FlagError;

/// Names answered by the help flag.
pub const RESERVED: [&str; 2] = ["h", "help"];

/// A named section of help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Key used to assign options and to query help
    pub name: String,
    /// Heading shown in help text
    pub description: String,
}

impl Group {
    /// Returns true if `query` names this group.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query) || self.description.eq_ignore_ascii_case(query)
    }
}

/// Registered options, their aliases and groups.
#[derive(Debug, Default)]
pub struct Registry {
    descriptors: Vec<Descriptor>,
    aliases: IndexMap<String, FlagId>,
    groups: Vec<Group>,
    case_sensitive: bool,
}

impl Registry {
    /// Creates an empty, case-insensitive registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches alias matching for help queries between exact and case-folded.
    pub const fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    /// Adds a descriptor under its long and short names.
    ///
    /// # Errors
    ///
    /// - [`FlagError::MissingBinding`] when neither name is given
    /// - [`FlagError::Redefined`] when a name is taken or reserved for help
    pub fn insert(&mut self, mut descriptor: Descriptor) -> Result<FlagId, FlagError> {
        descriptor.promote_short();
        if descriptor.long().trim().is_empty() {
            return Err(FlagError::MissingBinding {
                usage: descriptor.usage().to_owned(),
            });
        }

        let names: Vec<String> = std::iter::once(descriptor.long())
            .chain(descriptor.short())
            .map(str::to_owned)
            .collect();
        for name in &names {
            if RESERVED.contains(&name.as_str()) || self.aliases.contains_key(name) {
                return Err(FlagError::Redefined { name: name.clone() });
            }
        }
        if names.len() == 2 && names[0] == names[1] {
            return Err(FlagError::Redefined {
                name: names[0].clone(),
            });
        }

        let id = FlagId(self.descriptors.len());
        self.descriptors.push(descriptor);
        for name in names {
            self.aliases.insert(name, id);
        }
        Ok(id)
    }

    /// Descriptor behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by another registry.
    #[must_use]
    pub fn get(&self, id: FlagId) -> &Descriptor {
        &self.descriptors[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: FlagId) -> &mut Descriptor {
        &mut self.descriptors[id.0]
    }

    /// Exact alias lookup.
    #[must_use]
    pub fn lookup(&self, alias: &str) -> Option<FlagId> {
        self.aliases.get(alias).copied()
    }

    /// Alias lookup for help queries, honoring the case-sensitivity toggle.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Descriptor> {
        let id = self.lookup(name).or_else(|| {
            if self.case_sensitive {
                return None;
            }
            self.aliases
                .iter()
                .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                .map(|(_, &id)| id)
        })?;
        Some(self.get(id))
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Descriptor> {
        self.descriptors.iter_mut()
    }

    /// Identifiers in registration order.
    pub fn ids(&self) -> impl Iterator<Item = FlagId> + use<> {
        (0..self.descriptors.len()).map(FlagId)
    }

    /// Number of registered options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// One descriptor per structural identity, in alias order.
    #[must_use]
    pub fn unique(&self) -> Vec<&Descriptor> {
        let mut seen = HashSet::new();
        self.aliases
            .values()
            .map(|&id| self.get(id))
            .filter(|descriptor| seen.insert(descriptor.identity()))
            .collect()
    }

    /// Declares a group, or updates the description of an existing one.
    pub fn set_group(&mut self, name: &str, description: &str) {
        if let Some(group) = self.groups.iter_mut().find(|group| group.name == name) {
            description.clone_into(&mut group.description);
        } else {
            self.groups.push(Group {
                name: name.to_owned(),
                description: description.to_owned(),
            });
        }
    }

    /// Puts `id` into `group`, replacing any earlier assignment.
    pub fn assign(&mut self, id: FlagId, group: &str) {
        self.get_mut(id).set_group(group);
    }

    /// Groups in declaration order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Group matching `query` by name or description.
    #[must_use]
    pub fn find_group(&self, query: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.matches(query))
    }

    /// Aliases containing `term`.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&str> {
        let folded = term.to_lowercase();
        self.aliases
            .keys()
            .filter(|alias| {
                if self.case_sensitive {
                    alias.contains(term)
                } else {
                    alias.to_lowercase().contains(&folded)
                }
            })
            .map(String::as_str)
            .collect()
    }
}
