pub mod background;
pub mod fuser;

pub use background::remove_background;
pub use fuser::{agree, agreement_width, SequenceFuser, DEFAULT_AGREEMENT_WIDTH_RATIO};
