//! Integration tests for `pagematter check`

mod common;

use predicates::prelude::*;

#[test]
fn test_check_valid_pages() {
    let site = common::TestSite::new();
    site.copy_fixture_page("about.md", "pages/about.md");
    site.copy_fixture_page("publications.md", "pages/publications.md");

    common::pagematter_cmd_in(&site.path)
        .args(["check", "pages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("about.md"))
        .stdout(predicate::str::contains("/publications/"));
}

#[test]
fn test_check_unterminated_header() {
    let site = common::TestSite::new();
    site.copy_fixture_page("about.md", "pages/about.md");
    site.write_file("pages/broken.md", "---\ntitle: broken\npermalink: /broken/\n");

    common::pagematter_cmd_in(&site.path)
        .args(["check", "pages"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("broken.md"))
        .stdout(predicate::str::contains("not terminated"))
        .stderr(predicate::str::contains("1 of 2 documents failed"));
}

#[test]
fn test_check_missing_opening_delimiter() {
    let site = common::TestSite::new();
    site.write_file("pages/plain.md", "# Just markdown\n");

    common::pagematter_cmd_in(&site.path)
        .args(["check", "pages/plain.md"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("front-matter delimiter"));
}

#[test]
fn test_check_invalid_field_type() {
    let site = common::TestSite::new();
    site.write_file(
        "pages/about.md",
        "---\npermalink: /\nannouncements:\n  enabled: true\n  limit: five\n---\nbody\n",
    );

    common::pagematter_cmd_in(&site.path)
        .args(["check", "pages"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("announcements.limit"))
        .stdout(predicate::str::contains("non-negative integer"));
}

#[test]
fn test_check_page_without_permalink_is_valid() {
    let site = common::TestSite::new();
    site.write_file("pages/draft.md", "---\ntitle: draft\n---\n");

    common::pagematter_cmd_in(&site.path)
        .args(["check", "pages/draft.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no permalink)"));
}

#[test]
fn test_check_empty_directory() {
    let site = common::TestSite::new();
    site.write_file("pages/notes.txt", "not a page");

    common::pagematter_cmd_in(&site.path)
        .args(["check", "pages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No pages found"));
}

#[test]
fn test_check_missing_file() {
    let site = common::TestSite::new();

    common::pagematter_cmd_in(&site.path)
        .args(["check", "pages/missing.md"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_check_non_string_key_in_group() {
    let site = common::TestSite::new();
    site.write_file("pages/about.md", "---\npermalink: /\nprofile:\n  0: left\n---\n");

    common::pagematter_cmd_in(&site.path)
        .args(["check", "pages"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("keys in 'profile' must be strings"));
}
