//! The editing core: one text buffer bound to an optional file, the comment
//! highlighter that is re-run after every keystroke, view settings, and the
//! boundary used to execute the buffer as code.
//! Nothing in here draws to the terminal; the `runpad` binary owns the UI.

pub mod error;
pub mod files;
pub mod highlight;
pub mod runner;
pub mod session;
pub mod view;
