/*!
 * Tests for file and folder utilities
 */

use anyhow::Result;
use subpress::file_utils::{FileManager, FileType};

use crate::common;

#[test]
fn test_fileExists_shouldDistinguishFilesAndDirs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir_path = temp_dir.path().to_path_buf();
    let file_path = common::create_test_file(&dir_path, "a.srt", "content")?;

    assert!(FileManager::file_exists(&file_path));
    assert!(!FileManager::file_exists(&dir_path));
    assert!(FileManager::dir_exists(&dir_path));
    assert!(!FileManager::dir_exists(&file_path));

    Ok(())
}

#[test]
fn test_findFiles_shouldFindSrtFilesRecursively() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();

    common::create_test_subtitle(&root, "one.srt")?;
    common::create_test_file(&root, "notes.txt", "not a subtitle")?;

    let nested = root.join("nested");
    std::fs::create_dir_all(&nested)?;
    common::create_test_subtitle(&nested, "two.SRT")?;

    let mut found = FileManager::find_files(&root, "srt")?;
    found.sort();

    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|p| p.ends_with("one.srt")));
    assert!(found.iter().any(|p| p.ends_with("two.SRT")));

    Ok(())
}

#[test]
fn test_findFiles_withDotPrefixedExtension_shouldNormalize() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    common::create_test_subtitle(&root, "one.srt")?;

    let found = FileManager::find_files(&root, ".srt")?;
    assert_eq!(found.len(), 1);

    Ok(())
}

#[test]
fn test_readToString_shouldReturnFileContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    let path = common::create_test_file(&root, "a.srt", "hello")?;

    assert_eq!(FileManager::read_to_string(&path)?, "hello");
    assert!(FileManager::read_to_string(root.join("missing.srt")).is_err());

    Ok(())
}

#[test]
fn test_detectFileType_withSrtExtension_shouldBeSubtitle() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    let path = common::create_test_subtitle(&root, "one.srt")?;

    assert_eq!(FileManager::detect_file_type(&path)?, FileType::Subtitle);

    Ok(())
}

#[test]
fn test_detectFileType_withSrtContentButOtherExtension_shouldSniffSubtitle() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    let path = common::create_test_file(&root, "renamed.txt", common::sample_srt())?;

    assert_eq!(FileManager::detect_file_type(&path)?, FileType::Subtitle);

    Ok(())
}

#[test]
fn test_detectFileType_withPlainText_shouldBeUnknown() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    let path = common::create_test_file(&root, "notes.txt", "just some notes")?;

    assert_eq!(FileManager::detect_file_type(&path)?, FileType::Unknown);

    Ok(())
}

#[test]
fn test_detectFileType_withMissingFile_shouldFail() {
    assert!(FileManager::detect_file_type("/nonexistent/missing.srt").is_err());
}
