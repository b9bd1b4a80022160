pub mod desired_state_applier;
pub mod resources;
