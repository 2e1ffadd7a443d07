mod variable_id;

pub use variable_id::VariableId;
