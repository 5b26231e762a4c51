// Public library interface for treemapper
// This allows the debug CLI tool to use the core modules

pub mod error;
pub mod layout;
pub mod place;
pub mod plan;
pub mod stats;
