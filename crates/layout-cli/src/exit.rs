//! Process exit codes.

use layout_persistence::LayoutError;

/// The command succeeded.
pub const EXIT_SUCCESS: i32 = 0;

/// Any failure without a more specific code.
pub const EXIT_FAILURE: i32 = 1;

/// The file's version does not match and `--force` was not given.
pub const EXIT_VERSION_MISMATCH: i32 = 2;

/// First layout error in the cause chain, if any.
pub fn layout_error(error: &anyhow::Error) -> Option<&LayoutError> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<LayoutError>())
}

/// Exit code for a failed command.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    match layout_error(error) {
        Some(LayoutError::VersionMismatch { .. }) => EXIT_VERSION_MISMATCH,
        _ => EXIT_FAILURE,
    }
}

/// Print an error with its user-facing hint and return its exit code.
pub fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    if let Some(layout_error) = layout_error(error) {
        eprintln!("{}", layout_error.user_message());
        if let Some(suggestion) = layout_error.suggestion() {
            eprintln!("hint: {suggestion}");
        }
    }
    exit_code_for(error)
}
