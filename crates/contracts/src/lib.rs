//! Wire types shared between the dataset overview frontend and the analysis backend.

pub mod dashboards;
