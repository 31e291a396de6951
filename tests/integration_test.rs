//! Integration tests for tagdir
//!
//! These tests verify end-to-end functionality by creating temporary folders
//! and running listings and renames through the public API.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;

use tagdir::filter::TagFilter;
use tagdir::mutate::{self, MAX_NAME_LEN, MutationError, RenameFailure};
use tagdir::query::{self, QueryError};
use tagdir::sort::SortMethod;
use tagdir::tagged::TaggedPath;
use tempfile::TempDir;

const SIMPLE_CASES: [&str; 20] = [
    "file0[foo].txt",
    "file1[bar].txt",
    "file2[baz].txt",
    "file3[foo].txt",
    "file4[foo bar].txt",
    "file5[foo bar baz fizz buzz].txt",
    "file6[fizz buzz].txt",
    "file7[bar fizz].txt",
    "file8[baz buzz foo].txt",
    "file9[baz fizz].txt",
    "file10[bar].txt",
    "file11[bar].txt",
    "file12[foo fizz].txt",
    "file13[foo buzz].txt",
    "file14[bar foo].txt",
    "file15[foo fizz buzz].txt",
    "file16[foo bar baz].txt",
    "file17[baz foo bar].txt",
    "file18[fizz buzz].txt",
    "file19[fizz].txt",
];

/// Helper function to create a temporary folder holding `names` as files
fn setup_folder(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        create_test_file(&dir.path().join(name), "test content").unwrap();
    }
    dir
}

/// Helper function to create a test file
fn create_test_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Helper function returning what is on disk, sorted
fn names_on_disk(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Helper function listing with a filter expression, names only, sorted
fn matching(dir: &Path, filter: &str) -> Vec<String> {
    let mut names = query::list_matching(dir, filter, SortMethod::Name, false)
        .unwrap()
        .names();
    names.sort();
    names
}

fn sorted(names: &[&str]) -> Vec<String> {
    let mut names: Vec<String> = names.iter().map(ToString::to_string).collect();
    names.sort();
    names
}

#[test]
fn test_filter_single_tag() {
    let dir = setup_folder(&SIMPLE_CASES);
    assert_eq!(
        matching(dir.path(), "baz"),
        sorted(&[
            "file2[baz].txt",
            "file5[foo bar baz fizz buzz].txt",
            "file8[baz buzz foo].txt",
            "file9[baz fizz].txt",
            "file16[foo bar baz].txt",
            "file17[baz foo bar].txt",
        ])
    );
}

#[test]
fn test_filter_forbidden_tag() {
    let dir = setup_folder(&SIMPLE_CASES);
    assert_eq!(
        matching(dir.path(), "-foo"),
        sorted(&[
            "file1[bar].txt",
            "file2[baz].txt",
            "file6[fizz buzz].txt",
            "file7[bar fizz].txt",
            "file9[baz fizz].txt",
            "file10[bar].txt",
            "file11[bar].txt",
            "file18[fizz buzz].txt",
            "file19[fizz].txt",
        ])
    );
}

#[test]
fn test_filter_required_and_forbidden() {
    let dir = setup_folder(&SIMPLE_CASES);
    assert_eq!(
        matching(dir.path(), "bar -foo"),
        sorted(&["file1[bar].txt", "file7[bar fizz].txt", "file10[bar].txt", "file11[bar].txt"])
    );
}

#[test]
fn test_filter_untagged_files_comic_order() {
    let dir = setup_folder(&["untagged3.txt", "untagged1.txt", "file[x].txt", "untagged0.txt", "untagged2.txt"]);
    let listing = query::list_matching(dir.path(), ":untagged:", SortMethod::Comic, false).unwrap();
    assert_eq!(
        listing.names(),
        ["untagged0.txt", "untagged1.txt", "untagged2.txt", "untagged3.txt"]
    );
    assert!(listing.known_tags.is_empty());
}

#[test]
fn test_filter_untagged_folders() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("no_tags")).unwrap();
    fs::create_dir(dir.path().join("tagged[foo]")).unwrap();

    assert_eq!(matching(dir.path(), ":untagged:"), ["no_tags"]);
}

#[test]
fn test_alphabetic_sorting() {
    let dir = setup_folder(&["cc.txt", "ab.txt", "ba.txt", "ca.txt", "aa.txt", "bc.txt", "cb.txt", "ac.txt", "bb.txt"]);
    let listing = query::list(dir.path(), &TagFilter::default(), SortMethod::Name, false).unwrap();
    assert_eq!(
        listing.names(),
        ["aa.txt", "ab.txt", "ac.txt", "ba.txt", "bb.txt", "bc.txt", "ca.txt", "cb.txt", "cc.txt"]
    );
}

#[test]
fn test_date_sorting_follows_creation_order() {
    let dir = TempDir::new().unwrap();
    let names = ["zeta.txt", "alpha.txt", "mid.txt", "beta.txt"];
    for name in names {
        create_test_file(&dir.path().join(name), "x").unwrap();
        thread::sleep(Duration::from_millis(20));
    }

    let listing = query::list(dir.path(), &TagFilter::default(), SortMethod::Date, false).unwrap();
    assert_eq!(listing.names(), names);
}

#[test]
fn test_descending_reverses_sort_order() {
    let dir = setup_folder(&SIMPLE_CASES);
    for method in [SortMethod::Name, SortMethod::Date, SortMethod::Comic] {
        let ascending = query::list(dir.path(), &TagFilter::default(), method, false).unwrap();
        let mut descending = query::list(dir.path(), &TagFilter::default(), method, true)
            .unwrap()
            .names();
        descending.reverse();
        assert_eq!(ascending.names(), descending, "method {method}");
    }
}

#[test]
fn test_shuffle_keeps_every_entry() {
    let dir = setup_folder(&SIMPLE_CASES);
    let mut names = query::list(dir.path(), &TagFilter::default(), SortMethod::Shuffle, false)
        .unwrap()
        .names();
    names.sort();
    assert_eq!(names, sorted(&SIMPLE_CASES));
}

#[test]
fn test_folders_listed_first() {
    let dir = setup_folder(&["a[x].txt", "b.txt"]);
    fs::create_dir(dir.path().join("zz[x]")).unwrap();

    let listing = query::list(dir.path(), &TagFilter::default(), SortMethod::Name, true).unwrap();
    assert_eq!(listing.names(), ["zz[x]", "b.txt", "a[x].txt"]);
    assert_eq!(listing.folder_count(), 1);
}

#[test]
fn test_known_tags() {
    let dir = setup_folder(&SIMPLE_CASES);
    let listing = query::list_matching(dir.path(), "", SortMethod::Name, false).unwrap();
    assert_eq!(
        listing.known_tags.iter().collect::<Vec<_>>(),
        ["bar", "baz", "buzz", "fizz", "foo"]
    );
}

#[test]
fn test_missing_folder() {
    let dir = TempDir::new().unwrap();
    let err = query::list(dir.path().join("gone"), &TagFilter::default(), SortMethod::Name, false)
        .unwrap_err();
    assert!(matches!(err, QueryError::DirectoryNotFound(_)));
}

#[test]
fn test_rename_with_tags_round_trip() {
    let dir = setup_folder(&["untagged0.txt"]);
    let orig = TaggedPath::parse(dir.path().join("untagged0.txt"), false).unwrap();

    let tagged = mutate::rename_with_tags(&orig, &["foo", "bar", "baz"]).unwrap();
    assert_eq!(names_on_disk(dir.path()), ["untagged0[foo bar baz].txt"]);

    let reparsed = TaggedPath::parse(tagged.full_path(), false).unwrap();
    assert_eq!(reparsed.tags(), ["foo", "bar", "baz"]);

    mutate::rename_with_tags::<&str>(&reparsed, &[]).unwrap();
    assert_eq!(names_on_disk(dir.path()), ["untagged0.txt"]);
}

#[test]
fn test_rename_keeps_content() {
    let dir = setup_folder(&["note.md"]);
    let orig = TaggedPath::parse(dir.path().join("note.md"), false).unwrap();

    let tagged = mutate::rename_with_tags(&orig, &["draft"]).unwrap();

    assert_eq!(fs::read_to_string(tagged.full_path()).unwrap(), "test content");
}

#[test]
fn test_long_name_is_refused() {
    let dir = setup_folder(&["f.txt"]);
    let orig = TaggedPath::parse(dir.path().join("f.txt"), false).unwrap();
    let tag = "t".repeat(MAX_NAME_LEN);

    let err = mutate::rename_with_tags(&orig, &[tag.as_str()]).unwrap_err();

    assert!(matches!(
        err,
        MutationError::RenameFailed { reason: RenameFailure::NameTooLong(_), .. }
    ));
    assert_eq!(names_on_disk(dir.path()), ["f.txt"]);
}

#[test]
fn test_replace_tag_across_folder() {
    let dir = setup_folder(&["file0[foo].txt", "file1[foo bar].txt", "file2[bar foo].txt", "file3[bar].txt", "file4[baz].txt", "untagged.txt"]);

    let summary = mutate::replace_tag_in_folder(dir.path(), "foo", "bar").unwrap();

    assert_eq!(summary.success_count(), 3);
    assert_eq!(
        names_on_disk(dir.path()),
        ["file0[bar].txt", "file1[bar].txt", "file2[bar].txt", "file3[bar].txt", "file4[baz].txt", "untagged.txt"]
    );
}

#[test]
fn test_delete_tag_across_folder() {
    let dir = setup_folder(&["file0[foo].txt", "file1[foo bar].txt", "file2[bar foo].txt", "file3[bar].txt", "file4[baz].txt", "untagged.txt"]);

    let summary = mutate::delete_tag_in_folder(dir.path(), "foo").unwrap();

    assert_eq!(summary.success_count(), 3);
    assert_eq!(
        names_on_disk(dir.path()),
        ["file0.txt", "file1[bar].txt", "file2[bar].txt", "file3[bar].txt", "file4[baz].txt", "untagged.txt"]
    );
}

#[test]
fn test_replace_tag_with_itself_changes_nothing() {
    let dir = setup_folder(&["a[foo].txt", "b[foo bar].txt"]);
    let before = names_on_disk(dir.path());

    let summary = mutate::replace_tag_in_folder(dir.path(), "foo", "foo").unwrap();

    assert_eq!(summary.success_count(), 0);
    assert!(!summary.has_errors());
    assert_eq!(names_on_disk(dir.path()), before);
}

#[test]
fn test_normalize_on_disk() {
    let dir = setup_folder(&["[c a c]scan.pdf"]);
    let orig = TaggedPath::parse(dir.path().join("[c a c]scan.pdf"), false).unwrap();

    mutate::rename_to(&orig, orig.normalize()).unwrap();

    assert_eq!(names_on_disk(dir.path()), ["scan[a c].pdf"]);
}
