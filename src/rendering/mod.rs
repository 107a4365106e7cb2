pub mod encode;
pub mod tint;
pub mod tone;

pub use encode::{encode_image, write_image};
pub use tint::apply_tint;
pub use tone::{apply_table, flip_horizontal, stretch_to_full_range};
