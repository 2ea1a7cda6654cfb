use std::io;

use serde::{Deserialize, Serialize};

use super::Pick;

/// The stdout record: `{"pick": "<label>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickResponse {
    pub pick: Pick,
}

impl PickResponse {
    /// Serialized fallback, for when serialization itself is unavailable.
    pub const SKIP_JSON: &'static [u8] = br#"{"pick": "SKIP"}"#;

    pub fn new(pick: Pick) -> Self {
        Self { pick }
    }

    /// The fixed fallback payload.
    pub fn skip() -> Self {
        Self { pick: Pick::Skip }
    }

    /// Serialize with `": "` / `", "` separators, e.g. `{"pick": "TAI"}`.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::with_capacity(24);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        self.to_json_bytes()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read a response produced by any pick source.
    ///
    /// Accepts any JSON object with a string `pick` field whose value names a
    /// label in any case. Everything else reads as `SKIP`.
    pub fn parse(raw: &str) -> Self {
        let pick = serde_json::from_str::<serde_json::Value>(raw)
            .ok()
            .and_then(|value| value.get("pick")?.as_str()?.parse::<Pick>().ok())
            .unwrap_or(Pick::Skip);
        Self { pick }
    }
}

/// Compact JSON with a space after `:` and `,`.
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}
