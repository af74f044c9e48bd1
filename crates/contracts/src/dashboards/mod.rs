pub mod d100_dataset_overview;
