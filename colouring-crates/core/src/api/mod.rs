mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`Solver`].
    //!
    //! A search ends in a [`SatisfactionResult`]: either a complete [`Solution`] or the statement
    //! that the graph cannot be coloured with the given palette.
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::basic_types::Solution;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod variables {
    //! Contains the variables which are used by the [`Solver`].
    //!
    //! Every vertex of the input graph becomes one variable. Vertices are identified by their
    //! integer label in the input, whereas the solver refers to them by a dense [`VariableId`];
    //! ids are handed out in ascending label order, so iterating over ids visits the vertices in
    //! ascending label order as well.
    pub use crate::engine::variables::VariableId;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod options {
    //! Contains the options which can be passed to the [`Solver`].
    //!
    //! These influence the following aspects:
    //! - The variable selection heuristic ([`VariableSelection`])
    //! - The value selection heuristic ([`ValueSelection`])
    //! - Whether a tentative assignment is propagated by narrowing its domain
    pub use crate::engine::SearchOptions;
    pub use crate::engine::ValueSelection;
    pub use crate::engine::VariableSelection;
    #[cfg(doc)]
    use crate::Solver;
}

#[doc(hidden)]
pub mod asserts {
    pub use crate::colouring_assert_advanced;
    pub use crate::colouring_assert_eq_simple;
    pub use crate::colouring_assert_moderate;
    pub use crate::colouring_assert_simple;
    pub use crate::colouring_asserts::COLOURING_ASSERT_ADVANCED;
    pub use crate::colouring_asserts::COLOURING_ASSERT_LEVEL_DEFINITION;
    pub use crate::colouring_asserts::COLOURING_ASSERT_MODERATE;
    pub use crate::colouring_asserts::COLOURING_ASSERT_SIMPLE;
}
