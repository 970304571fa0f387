mod modules;

// Re-export all public items from modules
pub use modules::bridge::*;
pub use modules::field::*;
pub use modules::point::*;
