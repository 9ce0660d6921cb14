//! Console front end and process-level setup.
pub mod console;
pub mod logging;
