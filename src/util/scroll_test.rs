use super::*;

#[test]
fn anchor_target_extracts_fragment_ids() {
    assert_eq!(anchor_target("#about"), Some("about"));
    assert_eq!(anchor_target("#contact"), Some("contact"));
}

#[test]
fn bare_hash_is_not_a_target() {
    assert_eq!(anchor_target("#"), None);
}

#[test]
fn non_anchor_hrefs_are_ignored() {
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("/resume.pdf"), None);
    assert_eq!(anchor_target("https://example.com/#about"), None);
}
