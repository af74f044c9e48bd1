//! Leptos components of the dataset overview page

mod general;
mod page;
mod panel;
mod tab_bar;

pub use page::DatasetOverview;
