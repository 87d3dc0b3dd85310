pub mod layout;

pub use layout::compute_grid;
