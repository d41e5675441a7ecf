use pathkit_core::format::OutputFormat;
use pathkit_core::search::{Algorithm, Heuristic};

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse algorithm name from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse heuristic name from string
pub fn parse_heuristic(s: &str) -> std::result::Result<Heuristic, String> {
    s.parse::<Heuristic>().map_err(|e| e.to_string())
}
