use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

const MAX_INPUT_SIZE: u64 = 1024 * 1024; // 1MB

/// Reads a source file into a UTF-8 string.
///
/// Translation payloads are small by design, so anything over 1 MB is
/// rejected up front rather than shipped to the provider.
///
/// # Errors
///
/// Returns an error if the file cannot be accessed, exceeds the size cap, or
/// is not valid UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to access file: {}", path.display()))?;

    if metadata.len() > MAX_INPUT_SIZE {
        bail!(
            "Input size ({:.1} MB) exceeds maximum allowed size (1 MB): {}",
            metadata.len() as f64 / 1024.0 / 1024.0,
            path.display()
        );
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_source() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "Hello, World!").unwrap();

        let content = read_source(temp_file.path()).unwrap();
        assert_eq!(content, "Hello, World!");
    }

    #[test]
    fn test_read_source_missing() {
        let result = read_source(Path::new("/nonexistent/path/to/file.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_source_unicode() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "こんにちは世界！🌍\n多言語テスト";
        write!(temp_file, "{content}").unwrap();

        assert_eq!(read_source(temp_file.path()).unwrap(), content);
    }

    #[test]
    fn test_read_source_exceeds_cap() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large.txt");
        fs::write(&file_path, "x".repeat(MAX_INPUT_SIZE as usize + 1)).unwrap();

        let result = read_source(&file_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_source_at_cap() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("max.txt");
        fs::write(&file_path, "x".repeat(MAX_INPUT_SIZE as usize)).unwrap();

        assert!(read_source(&file_path).is_ok());
    }
}
