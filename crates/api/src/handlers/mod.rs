pub mod strands;
pub mod threads;
