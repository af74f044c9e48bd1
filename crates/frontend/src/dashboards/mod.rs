pub mod d100_dataset_overview;

pub use d100_dataset_overview::ui::DatasetOverview;
