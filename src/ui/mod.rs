pub mod reveal;
pub mod typewriter;
