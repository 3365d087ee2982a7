// Pure functions for save files
// No I/O - operate on file names and already-read document text

pub mod filename;
pub mod header;
pub mod xml;

pub use filename::is_save_file_name;
pub use header::parse_header;
pub use xml::parse_document;
