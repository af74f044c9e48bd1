pub mod select;

pub use select::Select;
