use std::fmt::Display;

/// The heuristic which picks the next variable to assign.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableSelection {
    /// Pick the unassigned variable with the smallest domain, breaking ties by lowest id; see
    /// [`MinimumRemainingValues`](crate::branching::variable_selection::MinimumRemainingValues).
    #[default]
    Mrv,
    /// Pick the unassigned variable with the lowest id; see
    /// [`InputOrder`](crate::branching::variable_selection::InputOrder).
    InputOrder,
}

impl Display for VariableSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableSelection::Mrv => write!(f, "mrv"),
            VariableSelection::InputOrder => write!(f, "input-order"),
        }
    }
}

/// The heuristic which orders the candidate values of the selected variable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValueSelection {
    /// Try the values which remove the fewest options from unassigned neighbours first; see
    /// [`LeastConstrainingValue`](crate::branching::value_selection::LeastConstrainingValue).
    #[default]
    Lcv,
    /// Try the values in the order in which they appear in the domain; see
    /// [`InDomainOrder`](crate::branching::value_selection::InDomainOrder).
    InDomainOrder,
}

impl Display for ValueSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSelection::Lcv => write!(f, "lcv"),
            ValueSelection::InDomainOrder => write!(f, "in-domain-order"),
        }
    }
}

/// Options which determine how the [`Solver`](crate::Solver) explores the search space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub variable_selection: VariableSelection,
    pub value_selection: ValueSelection,
    /// If set, the domain of a tentatively assigned variable is reduced to the assigned value
    /// before arc consistency runs on the branch. Off by default, in which case arc consistency
    /// only prunes based on domains which were already singletons.
    pub propagate_assignments: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_use_mrv_and_lcv_without_narrowing() {
        let options = SearchOptions::default();

        assert_eq!(options.variable_selection, VariableSelection::Mrv);
        assert_eq!(options.value_selection, ValueSelection::Lcv);
        assert!(!options.propagate_assignments);
    }

    #[test]
    fn display_matches_command_line_names() {
        assert_eq!(VariableSelection::InputOrder.to_string(), "input-order");
        assert_eq!(ValueSelection::InDomainOrder.to_string(), "in-domain-order");
    }
}
