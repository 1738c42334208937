//! Unit tests for fragment discovery.

use std::path::PathBuf;

use anyhow::{Result, ensure};
use rstest::{fixture, rstest};
use test_helpers::FragmentDir;

use super::DirectoryScanner;

#[fixture]
fn scanner() -> DirectoryScanner {
    DirectoryScanner::builder()
        .build()
        .unwrap_or_else(|err| panic!("default scanner must build: {err}"))
}

fn relative(dir: &FragmentDir, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .filter_map(|file| file.strip_prefix(dir.path()).ok())
        .map(|file| file.to_string_lossy().replace('\\', "/"))
        .collect()
}

#[rstest]
fn missing_directory_yields_no_files(scanner: DirectoryScanner) -> Result<()> {
    let dir = FragmentDir::new()?;
    let files = scanner.scan(&[dir.join("does-not-exist")], "json")?;
    ensure!(files.is_empty(), "expected no files, got {files:?}");
    Ok(())
}

#[rstest]
fn files_are_sorted_and_recursive(scanner: DirectoryScanner) -> Result<()> {
    let dir = FragmentDir::new()?;
    dir.write("b.json", "{}")?;
    dir.write("a/z.json", "{}")?;
    dir.write("a.json", "{}")?;
    dir.write("c/d/e.json", "{}")?;

    let files = scanner.scan(&[dir.path()], "json")?;
    assert_eq!(
        relative(&dir, &files),
        vec!["a.json", "a/z.json", "b.json", "c/d/e.json"]
    );
    Ok(())
}

#[rstest]
#[case::json("json", vec!["base.json"])]
#[case::yaml("yaml|yml", vec!["base.yaml", "extra.yml"])]
#[case::toml("toml", vec!["base.toml"])]
fn only_matching_suffixes_are_listed(
    scanner: DirectoryScanner,
    #[case] suffix: &str,
    #[case] expected: Vec<&str>,
) -> Result<()> {
    let dir = FragmentDir::new()?;
    for name in ["base.json", "base.yaml", "extra.yml", "base.toml", "notes.txt", "json"] {
        dir.write(name, "")?;
    }
    let files = scanner.scan(&[dir.path()], suffix)?;
    assert_eq!(relative(&dir, &files), expected);
    Ok(())
}

#[rstest]
fn trash_directories_are_pruned(scanner: DirectoryScanner) -> Result<()> {
    let dir = FragmentDir::new()?;
    dir.write("keep.json", "{}")?;
    dir.write(".Trash/old.json", "{}")?;
    dir.write("nested/.Trash-1000/older.json", "{}")?;
    dir.write("nested/kept.json", "{}")?;

    let files = scanner.scan(&[dir.path()], "json")?;
    assert_eq!(relative(&dir, &files), vec!["keep.json", "nested/kept.json"]);
    Ok(())
}

#[rstest]
fn custom_exclusion_pattern_is_honoured() -> Result<()> {
    let dir = FragmentDir::new()?;
    dir.write("keep.json", "{}")?;
    dir.write("disabled/skip.json", "{}")?;
    let scanner = DirectoryScanner::builder().exclude("^disabled$").build()?;
    let files = scanner.scan(&[dir.path()], "json")?;
    assert_eq!(relative(&dir, &files), vec!["keep.json"]);
    Ok(())
}

#[rstest]
fn directories_keep_their_order_and_duplicates(scanner: DirectoryScanner) -> Result<()> {
    let first = FragmentDir::new()?;
    let second = FragmentDir::new()?;
    first.write("shared.json", "{}")?;
    first.write("z-last.json", "{}")?;
    second.write("a-first.json", "{}")?;
    second.write("shared.json", "{}")?;

    let files = scanner.scan(&[second.path(), first.path()], "json")?;
    let expected = vec![
        second.join("a-first.json"),
        second.join("shared.json"),
        first.join("shared.json"),
        first.join("z-last.json"),
    ];
    assert_eq!(files, expected);
    Ok(())
}

#[rstest]
fn repeated_scans_are_identical(scanner: DirectoryScanner) -> Result<()> {
    let dir = FragmentDir::new()?;
    for name in ["m.json", "b/a.json", "a/b.json", "0.json"] {
        dir.write(name, "{}")?;
    }
    let once = scanner.scan(&[dir.path()], "json")?;
    let twice = scanner.scan(&[dir.path()], "json")?;
    ensure!(once == twice, "scans differ: {once:?} vs {twice:?}");
    let mut sorted = once.clone();
    sorted.sort();
    ensure!(once == sorted, "scan result is not sorted: {once:?}");
    Ok(())
}

#[test]
fn invalid_exclusion_pattern_is_rejected() {
    let result = DirectoryScanner::builder().exclude("(unclosed").build();
    assert!(result.is_err());
}
