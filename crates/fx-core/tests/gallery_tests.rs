// Tests for gallery presentation math: thumbnail URL rewriting, reveal
// stagger timing and the grid ripple falloff.

use fx_core::gallery::{
    drive_file_id, drive_thumbnail_url, grid_ripple, line_mount_delay_sec, line_rest_width,
    reveal_delay_sec,
};
use std::borrow::Cow;

const SHARE_URL: &str =
    "https://drive.google.com/file/d/1a2B3c4D5e6F7g8H9i0JkLmNoPqRsTuVw/view?usp=sharing";

#[test]
fn file_id_is_extracted_from_a_share_link() {
    assert_eq!(
        drive_file_id(SHARE_URL),
        Some("1a2B3c4D5e6F7g8H9i0JkLmNoPqRsTuVw")
    );
}

#[test]
fn short_tokens_are_not_mistaken_for_ids() {
    assert_eq!(drive_file_id("https://example.com/images/artwork-12.jpg"), None);
}

#[test]
fn id_run_at_end_of_url_is_found() {
    let url = "https://drive.google.com/open?id=1a2B3c4D5e6F7g8H9i0JkLmNoPqRsTuVw";
    assert_eq!(
        drive_file_id(url),
        Some("1a2B3c4D5e6F7g8H9i0JkLmNoPqRsTuVw")
    );
}

#[test]
fn thumbnail_url_wraps_the_extracted_id() {
    let url = drive_thumbnail_url(SHARE_URL);
    assert_eq!(
        url,
        "https://drive.google.com/thumbnail?id=1a2B3c4D5e6F7g8H9i0JkLmNoPqRsTuVw&sz=w1000"
    );
}

#[test]
fn unrecognized_urls_pass_through_unchanged() {
    let url = "https://example.com/a.png";
    let out = drive_thumbnail_url(url);
    assert_eq!(out, url);
    assert!(matches!(out, Cow::Borrowed(_)));
}

#[test]
fn reveal_delays_are_staggered_monotonically() {
    let mut prev = 0.0;
    for i in 0..25 {
        let d = reveal_delay_sec(i);
        assert!(d > prev);
        prev = d;
    }
    assert!((reveal_delay_sec(0) - 0.1).abs() < 1e-6);
    assert!((reveal_delay_sec(3) - 0.4).abs() < 1e-6);
}

#[test]
fn line_widths_alternate_by_tile_parity() {
    assert!((line_rest_width(0) - 0.6).abs() < 1e-6);
    assert!((line_rest_width(1) - 0.4).abs() < 1e-6);
    assert!((line_rest_width(2) - 0.6).abs() < 1e-6);
}

#[test]
fn line_delays_stagger_within_a_tile() {
    let base = line_mount_delay_sec(2, 0);
    let later = line_mount_delay_sec(2, 10);
    assert!(later > base);
    assert!((later - base - 0.5).abs() < 1e-6);
}

#[test]
fn ripple_is_full_at_center_and_fades_with_distance() {
    let columns = 8;
    let rows = 6;
    let center = 3 + 2 * columns; // (3, 2)
    assert!((grid_ripple(columns, rows, center, center) - 1.0).abs() < 1e-6);

    let near = 4 + 2 * columns;
    let far = 7 + 5 * columns;
    let r_near = grid_ripple(columns, rows, center, near);
    let r_far = grid_ripple(columns, rows, center, far);
    assert!(r_near > r_far);
    assert!(r_far >= 0.0);
}

#[test]
fn ripple_clamps_degenerate_arguments_to_zero() {
    assert_eq!(grid_ripple(0, 5, 0, 0), 0.0);
    assert_eq!(grid_ripple(5, 0, 0, 0), 0.0);
    assert_eq!(grid_ripple(4, 4, 99, 0), 0.0);
    assert_eq!(grid_ripple(4, 4, 0, 99), 0.0);
}
