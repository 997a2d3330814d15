/// Log filter used when `RUST_LOG` is not set.
///
/// The program has no standard output; raise this to see per-call traces.
pub const DEFAULT_LOG_FILTER: &str = "warn";
