pub mod block_range;
