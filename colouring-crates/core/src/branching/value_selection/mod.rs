//! Provides the [`ValueSelector`] trait which is required for value selectors to implement; the
//! main method in this trait is [`ValueSelector::order_values`].
//!
//! Two selectors are provided:
//! - [`LeastConstrainingValue`] tries the colours which rule out the fewest options for the
//!   neighbours first.
//! - [`InDomainOrder`] tries the colours in the order in which they appear in the domain.
mod in_domain_order;
mod least_constraining_value;
mod value_selector;

pub use in_domain_order::InDomainOrder;
pub use least_constraining_value::*;
pub use value_selector::ValueSelector;
