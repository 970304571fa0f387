pub mod bridge;
pub mod field;
pub mod point;
