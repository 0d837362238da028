pub mod group;

pub use group::{assemble, assemble_with, GroupSettings};
