pub mod pointer;
pub mod scroll;

pub use pointer::wire_pointermove;
pub use scroll::wire_scroll;
