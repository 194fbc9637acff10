//! Payload naming and content types.

use uuid::Uuid;

/// Directory, relative to the media root, holding audio payloads.
pub const AUDIO_DIR: &str = "audio";

/// Directory, relative to the media root, holding profile pictures.
pub const AVATAR_DIR: &str = "profile_pics";

/// Longest file name most filesystems accept, in bytes.
const MAX_NAME_BYTES: usize = 255;

/// Bytes taken by the `<32 hex chars>_` prefix.
const PREFIX_BYTES: usize = 33;

/// Build a unique storage path for an uploaded file, keeping its name readable:
/// `audio/<32 hex chars>_<sanitized name>`. The last component never exceeds
/// 255 bytes.
pub fn payload_path(original_name: &str) -> String {
    unique_path(AUDIO_DIR, original_name)
}

/// Same as [`payload_path`], under `profile_pics/`.
pub fn avatar_path(original_name: &str) -> String {
    unique_path(AVATAR_DIR, original_name)
}

fn unique_path(dir: &str, original_name: &str) -> String {
    let name = sanitize_file_name(original_name);
    format!(
        "{dir}/{}_{}",
        Uuid::new_v4().simple(),
        fit_to_bytes(&name, MAX_NAME_BYTES - PREFIX_BYTES)
    )
}

/// Shorten `name` to at most `max` bytes on a char boundary, keeping a short
/// extension intact.
fn fit_to_bytes(name: &str, max: usize) -> String {
    if name.len() <= max {
        return name.to_string();
    }
    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && ext.len() < max / 2 => (stem, Some(ext)),
        _ => (name, None),
    };
    let budget = max - ext.map_or(0, |e| e.len() + 1);
    let mut cut = budget.min(stem.len());
    while !stem.is_char_boundary(cut) {
        cut -= 1;
    }
    match ext {
        Some(ext) => format!("{}.{ext}", &stem[..cut]),
        None => stem[..cut].to_string(),
    }
}

/// Reduce a client-supplied file name to a safe single path component.
pub fn sanitize_file_name(name: &str) -> String {
    // Browsers on Windows may send the full client path.
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Guess a MIME type for a stored payload from its extension.
pub fn content_type_for(path: &str) -> &'static str {
    let ext = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "flac" => "audio/flac",
        "m4a" | "aac" => "audio/mp4",
        "webm" => "audio/webm",
        "mid" | "midi" => "audio/midi",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
