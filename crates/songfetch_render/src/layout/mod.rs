pub mod ansi;
pub mod compositor;
