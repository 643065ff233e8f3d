//! Network layer - directory service access
//!
//! The Network actor receives fetch commands and sends back responses.

pub mod actor;
pub mod client;
pub mod traits;

pub use actor::NetworkActor;
pub use client::DirectoryClient;
pub use traits::DirectoryService;
