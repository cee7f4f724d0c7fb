//! The contract between a workflow host and a node: the models exchanged over HTTP, the
//! traits a node implements, and a default server to run it.

pub mod default_main;
pub mod models;
pub mod node;
