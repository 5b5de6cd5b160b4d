/// Write both documents to an output directory.
pub mod inspect;
/// Print the insight report.
pub mod report;
/// Print the translation document.
pub mod translate;

mod util;
