pub mod border;
pub mod config;
pub mod generate;
pub mod id;
pub mod layout;
pub mod lint;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod scale;
pub mod size;

pub use border::{border_radius, border_width};
pub use config::ConvertConfig;
pub use generate::{NodeClasses, classes_for, generate_classes};
pub use id::NodeId;
pub use layout::flex_container;
pub use lint::{LintDiagnostic, LintSeverity, lint_document};
pub use loader::{LoadError, load_document};
pub use model::*;
pub use pipeline::{convert_document, convert_document_json};
pub use size::{container_size, size_with_strokes};

// Re-export petgraph types so downstream crates don't need a direct dependency
pub use petgraph::graph::NodeIndex;
