/// Errors raised while turning raw stdin text into a request.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("malformed request: {reason}")]
    Malformed { reason: String },
}
