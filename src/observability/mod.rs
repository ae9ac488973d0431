//! Tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer → OtlpFileExporter → RotatingSink
//! ```
//!
//! Spans land in `zfolio-otlp.json` in the plugin data directory
//! (`~/.local/share/zellij/zfolio` from inside Zellij), one OTLP-JSON
//! document per line. The file rotates at 4 MiB and the three newest rotated
//! files are kept.
//!
//! The level comes from `RUST_LOG` when set, then the `trace_level` plugin
//! option, then `info`.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`exporter`]: span exporter and OTLP-JSON encoding
//! - [`sink`]: size-rotated file

pub mod exporter;
pub mod init;
pub mod sink;

pub use init::{init_tracing, TRACE_FILE};
