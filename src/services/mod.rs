pub mod stats_reader;

pub use stats_reader::StatsReader;
