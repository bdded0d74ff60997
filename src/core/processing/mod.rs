pub mod resize;

pub use resize::{compute_target_size, resize_image};
