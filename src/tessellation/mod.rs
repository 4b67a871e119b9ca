mod ear_clipping;

pub use ear_clipping::{clip_ears, EarSpace};
