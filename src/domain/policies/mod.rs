//! Domain Policies
//!
//! Business rules that pick between documented behaviors.

mod deselect_policy;
mod missing_target_policy;

pub use deselect_policy::DeselectPolicy;
pub use missing_target_policy::MissingTargetPolicy;
