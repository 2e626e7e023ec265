mod bidirectional;
mod ch_bidirectional;
mod dijkstra;
mod direction;
mod half_search;
mod search_error;
mod search_tree;
mod termination;

pub use bidirectional::{run as run_bidirectional, BidirectionalResult};
pub use ch_bidirectional::{run as run_ch_bidirectional, ChBidirectionalResult};
pub use dijkstra::run as run_dijkstra;
pub use direction::SearchDirection;
pub use search_error::SearchError;
pub use search_tree::{unpack_backward_chain, unpack_edge_ids, FrontierEntry, SearchTree, SearchTreeBranch};
pub use termination::{CancelToken, SearchTermination};
