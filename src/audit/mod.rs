pub mod logger;

pub use logger::CommandHistory;
