pub mod calculation;
pub mod report;
