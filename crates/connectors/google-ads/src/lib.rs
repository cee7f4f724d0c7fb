pub mod credentials;
pub mod description;
pub mod error;
pub mod execute;
pub mod node;
pub mod state;
