/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encodes `segment` so it stays one path segment once joined
///
/// # Errors
/// Returns `AppError::InvalidInput` for an empty segment, `.` or `..`, which a
/// URL parser would collapse into a different path
pub fn encode_segment(segment: &str) -> Result<String, AppError> {
    if segment.is_empty() || segment == "." || segment == ".." {
        return Err(AppError::InvalidInput(format!(
            "invalid resource id: {segment:?}"
        )));
    }
    Ok(utf8_percent_encode(segment, SEGMENT).to_string())
}

/// Builds `base/<id>` with `id` encoded as a single segment
pub fn resource_path(base: &str, id: &str) -> Result<String, AppError> {
    Ok(format!("{}/{}", base, encode_segment(id)?))
}
