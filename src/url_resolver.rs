/*!
 * Video URL resolution.
 *
 * Extracts the video identifier from user-supplied YouTube URLs. Matching is
 * purely substring-based: the scheme and host are never validated.
 */

use crate::errors::ResolveError;

/// Opaque video identifier extracted from a URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extract the video id from a YouTube URL.
///
/// Supports the long form (`https://www.youtube.com/watch?v=VIDEO_ID`) and the
/// short-link form (`https://youtu.be/VIDEO_ID`). The id runs from the marker
/// to the next query separator or the end of the string.
///
/// # Arguments
/// * `url` - The URL string as typed by the user
///
/// # Returns
/// * `Result<VideoId, ResolveError>` - The extracted id, or `InvalidUrlFormat`
///   carrying the original string when no recognized marker is present
pub fn extract_video_id(url: &str) -> Result<VideoId, ResolveError> {
    let id = if let Some((_, rest)) = url.split_once("v=") {
        rest.split('&').next().unwrap_or_default()
    } else if let Some((_, rest)) = url.split_once("youtu.be/") {
        rest.split('?').next().unwrap_or_default()
    } else {
        return Err(ResolveError::InvalidUrlFormat(url.to_string()));
    };

    // A marker followed by nothing is still not a usable reference
    if id.is_empty() {
        return Err(ResolveError::InvalidUrlFormat(url.to_string()));
    }

    Ok(VideoId(id.to_string()))
}
