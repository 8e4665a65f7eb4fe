/// Errors reported by an overlay window backend
#[derive(thiserror::Error, Debug)]
pub enum OverlayError {
    /// No primary screen is attached, so the window cannot be placed
    #[error("No primary screen available")]
    NoScreen,

    /// The backend rejected an operation
    #[error("Window backend failed to {operation}: {details}")]
    Backend {
        /// Operation that failed
        operation: &'static str,
        /// Backend-specific description
        details: String,
    },
}
