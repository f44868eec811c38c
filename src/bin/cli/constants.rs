pub const VERSION: &str = "v0.1.0";
pub const SAVED_MESSAGE: &str = "File saved successfully.";
pub const LOG_DIR: &str = ".runpad";
pub const LOG_FILE: &str = "runpad.log";
pub const LOG_ENV: &str = "RUNPAD_LOG";
pub const USAGE: &str = "Usage: runpad [FILE]\n\nOptions:\n  -h, --help       Print this help\n  -V, --version    Print the version\n\nEnvironment:\n  RUNPAD_INTERPRETER   Program used by Run Code (default: python3)\n  RUNPAD_LOG           Log filter written to ~/.runpad/runpad.log";
