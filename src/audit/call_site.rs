//! Call-site snapshots attached to audit records.

use serde_json::{json, Value};

/// Captures the current stack as a JSON array of
/// `{"function", "file", "line"}` objects, innermost first.
///
/// Frames belonging to the unwinder itself are dropped. Returns `None` when
/// no frame can be symbolized (stripped binaries, unsupported targets), in
/// which case the record simply has no `backtrace` field.
pub(crate) fn capture(max_frames: usize) -> Option<Value> {
    if max_frames == 0 {
        return None;
    }

    let backtrace = backtrace::Backtrace::new();
    let frames: Vec<Value> = backtrace
        .frames()
        .iter()
        .flat_map(|frame| frame.symbols())
        .filter_map(|symbol| {
            let function = format!("{:#}", symbol.name()?);
            if function.starts_with("backtrace::") {
                return None;
            }
            Some(json!({
                "function": function,
                "file": symbol.filename().map(|path| path.display().to_string()),
                "line": symbol.lineno(),
            }))
        })
        .take(max_frames)
        .collect();

    if frames.is_empty() {
        None
    } else {
        Some(Value::Array(frames))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_frames_disables_capture() {
        assert!(capture(0).is_none());
    }

    #[test]
    fn respects_frame_limit() {
        if let Some(Value::Array(frames)) = capture(3) {
            assert!(frames.len() <= 3);
            for frame in &frames {
                assert!(frame.get("function").and_then(Value::as_str).is_some());
                assert!(frame.get("line").is_some());
            }
        }
    }
}
