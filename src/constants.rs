//! Common constants used throughout vuez.

/// OS metadata file that is never copied into a new project.
pub const IGNORE_MARKER: &str = ".DS_Store";

/// Extensions (lower-case) of files rendered as templates; everything else is
/// copied byte for byte.
pub const TEMPLATE_EXTENSIONS: [&str; 7] = ["html", "js", "css", "json", "ts", "md", "vue"];

/// Template tree bundled with the package.
pub const TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");
