pub mod annotate;
pub mod builder;
pub mod node;
