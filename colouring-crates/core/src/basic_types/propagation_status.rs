use crate::engine::variables::VariableId;

/// The result of running propagation on a [`DomainStore`](crate::DomainStore).
///
/// Propagation either reaches a fixpoint in which every domain is non-empty, or it stops at the
/// first variable whose domain has been emptied.
pub type PropagationStatus = Result<(), EmptyDomain>;

/// Indicates that the domain of `variable` became empty during propagation, meaning the current
/// partial assignment cannot be extended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain {
    pub variable: VariableId,
}
