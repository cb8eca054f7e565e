// Adapters layer: the JSON-file host, diagnostic sinks and acknowledgement bookkeeping.

pub mod host;
pub mod json_model;
pub mod sink;
