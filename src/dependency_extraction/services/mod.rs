mod line_parser;
mod stream_aggregator;

pub use line_parser::{LineParser, DEP_MARKER};
pub use stream_aggregator::StreamAggregator;
