//! The single request/response exchange.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use sicbo_core::{Outcome, PickModel, PickResponse};
use tracing::{debug, warn};

/// Read all of `input`, run one pick attempt, write the JSON record to `output`.
///
/// The record is always written, `SKIP` on any failure. Only a failed write
/// is reported back to the caller.
pub fn respond<R, W>(
    mut input: R,
    mut output: W,
    model: Option<&dyn PickModel>,
) -> io::Result<Outcome>
where
    R: Read,
    W: Write,
{
    let raw = read_input(&mut input);
    let outcome = sicbo_inference::run(&raw, model);

    let payload = outcome.response().to_json_bytes().unwrap_or_else(|e| {
        warn!(error = %e, "response serialization failed, writing fixed SKIP");
        PickResponse::SKIP_JSON.to_vec()
    });

    output.write_all(&payload)?;
    output.flush()?;

    debug!(pick = %outcome.pick(), fallback = outcome.is_fallback(), "pick written");
    Ok(outcome)
}

/// Read input to end. Invalid UTF-8 is replaced; a read error yields
/// whatever was read so far, which then fails to parse.
fn read_input<R: Read>(input: &mut R) -> String {
    let mut buf = Vec::new();
    if let Err(e) = input.read_to_end(&mut buf) {
        warn!(error = %e, bytes = buf.len(), "failed to read input");
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Directory the running binary is installed in. The model artifact and
/// `sicbo.toml` are looked up here.
pub fn install_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| {
            warn!("could not determine executable directory, falling back to current_dir");
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        })
}
