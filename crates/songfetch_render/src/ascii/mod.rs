pub mod fallback;
pub mod gradient;
pub mod grid;
pub mod mapping;
