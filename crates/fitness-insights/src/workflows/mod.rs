pub mod candidates;
pub mod sheets;
