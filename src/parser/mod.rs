pub mod earley;

pub use earley::ChartParser;
