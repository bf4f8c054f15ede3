//! Presentation math for the gallery page: thumbnail URL rewriting,
//! staggered reveal timing and the interactive grid ripple.

use crate::constants::{
    LINE_REST_WIDTH_EVEN, LINE_REST_WIDTH_ODD, LINE_STAGGER_MOUNT_SEC, REVEAL_BASE_DELAY_SEC,
    REVEAL_STEP_SEC,
};
use std::borrow::Cow;

/// Shared-drive file ids are long opaque tokens; anything shorter is part of
/// the surrounding URL structure.
const DRIVE_ID_MIN_LEN: usize = 25;

/// Extract the first run of 25+ `[-A-Za-z0-9_]` characters from a URL.
pub fn drive_file_id(url: &str) -> Option<&str> {
    let bytes = url.as_bytes();
    let mut start = None;
    for (i, &b) in bytes.iter().enumerate() {
        let id_char = b == b'-' || b == b'_' || b.is_ascii_alphanumeric();
        match (id_char, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i - s >= DRIVE_ID_MIN_LEN {
                    return Some(&url[s..i]);
                }
                start = None;
            }
            _ => {}
        }
    }
    match start {
        Some(s) if bytes.len() - s >= DRIVE_ID_MIN_LEN => Some(&url[s..]),
        _ => None,
    }
}

/// Rewrite a shared-drive link to its thumbnail endpoint. URLs without a
/// recognizable file id pass through unchanged.
pub fn drive_thumbnail_url(url: &str) -> Cow<'_, str> {
    match drive_file_id(url) {
        Some(id) => Cow::Owned(format!(
            "https://drive.google.com/thumbnail?id={id}&sz=w1000"
        )),
        None => Cow::Borrowed(url),
    }
}

/// Mount delay for the tile at `index`; tiles reveal top to bottom.
pub fn reveal_delay_sec(index: usize) -> f32 {
    REVEAL_BASE_DELAY_SEC + REVEAL_STEP_SEC * index as f32
}

/// Resting width of a tile's hover lines, alternating by tile parity.
pub fn line_rest_width(tile_index: usize) -> f32 {
    if tile_index % 2 == 0 {
        LINE_REST_WIDTH_EVEN
    } else {
        LINE_REST_WIDTH_ODD
    }
}

/// Mount delay of one hover line within a tile's stagger sequence.
pub fn line_mount_delay_sec(tile_index: usize, line_index: usize) -> f32 {
    reveal_delay_sec(tile_index) + LINE_STAGGER_MOUNT_SEC * line_index as f32
}

/// Normalized ripple falloff for the interactive grid overlay: 1.0 at the
/// activated cell, fading linearly with distance, 0.0 for out-of-range
/// arguments or an empty grid.
pub fn grid_ripple(columns: usize, rows: usize, center: usize, index: usize) -> f32 {
    if columns == 0 || rows == 0 {
        return 0.0;
    }
    let cells = columns * rows;
    if center >= cells || index >= cells {
        return 0.0;
    }
    let cx = (center % columns) as f32;
    let cy = (center / columns) as f32;
    let x = (index % columns) as f32;
    let y = (index / columns) as f32;
    let d = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
    let max_d = ((columns * columns + rows * rows) as f32).sqrt();
    (1.0 - d / max_d).clamp(0.0, 1.0)
}
