pub mod copy;
pub mod scroll;

pub use copy::wire_copy_buttons;
pub use scroll::wire_parallax;
