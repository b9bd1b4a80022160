pub mod applied_state_document_resource;
pub mod desired_state_document_resource;
