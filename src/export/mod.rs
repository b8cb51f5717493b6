//! Output formats: node-link data, the topsim simulator envelope and Graphviz dot.

pub mod dot;
pub mod node_link;
pub mod topsim;

pub use dot::{to_dot, write_dot};
pub use node_link::{NodeLinkData, NodeLinkEdge, NodeLinkNode};
pub use topsim::{TopsimHeader, TopsimWorkflow, write_topsim};
