use crate::basic_types::Colour;
use crate::containers::KeyedVec;
use crate::engine::domains::Domain;
use crate::engine::variables::VariableId;

/// The current domain of every variable.
///
/// The search clones the store once per candidate value it tries, and all propagation for that
/// candidate happens on the clone; `Clone` is a deep copy, so a sibling branch never observes the
/// pruning done by another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainStore {
    domains: KeyedVec<VariableId, Domain>,
}

impl DomainStore {
    /// Creates a store in which each of the `num_variables` variables has domain `1..=palette_size`.
    pub fn new(num_variables: usize, palette_size: u32) -> DomainStore {
        DomainStore {
            domains: KeyedVec::filled(num_variables, Domain::full(palette_size)),
        }
    }

    pub fn num_variables(&self) -> usize {
        self.domains.len()
    }

    pub fn domain_of(&self, variable: VariableId) -> &Domain {
        &self.domains[variable]
    }

    pub fn size_of(&self, variable: VariableId) -> usize {
        self.domains[variable].len()
    }

    pub fn contains(&self, variable: VariableId, value: Colour) -> bool {
        self.domains[variable].contains(value)
    }

    pub fn is_empty(&self, variable: VariableId) -> bool {
        self.domains[variable].is_empty()
    }

    /// Removes `value` from the domain of `variable`, returning whether it was present.
    pub fn remove_value(&mut self, variable: VariableId, value: Colour) -> bool {
        self.domains[variable].remove(value)
    }

    /// Narrows the domain of `variable` to `{value}` (or to nothing if `value` was not present),
    /// returning whether the domain changed.
    pub fn narrow_to(&mut self, variable: VariableId, value: Colour) -> bool {
        self.domains[variable].retain_only(value)
    }

    /// The sum of all domain sizes.
    pub fn total_size(&self) -> usize {
        self.domains.iter().map(Domain::len).sum()
    }
}
