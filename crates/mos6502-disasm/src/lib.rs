pub mod listing;
pub mod model;

pub use listing::{render_range, LineOut};
pub use model::{load_raw_bin, read_u8, Image, Segment};
