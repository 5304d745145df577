mod arena;
mod node;
mod node_id;
mod tree;

pub(crate) use arena::Arena;
pub(crate) use node_id::NodeId;
pub(crate) use tree::{RawIter, RbTree};
