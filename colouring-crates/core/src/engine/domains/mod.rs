mod domain;
mod domain_store;

pub use domain::Domain;
pub use domain_store::DomainStore;
