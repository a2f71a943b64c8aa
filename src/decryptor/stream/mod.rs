// src/decryptor/stream/mod.rs
pub(crate) mod context;
pub mod lookahead;
pub mod trailer;

pub use lookahead::{BlockReadOutcome, LookaheadCipherStream, ShortRead};
pub use trailer::{strip_padding, write_final_block, PaddingPolicy, PaddingStatus};
