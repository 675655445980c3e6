use anyhow::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for file reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for one file read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub bytes_read: u64,
    pub chars_read: u64,
    pub read_error: Option<String>,
}

/// Async file reader loading whole UTF-8 texts into memory
pub struct AsyncFileReader {
    config: ReaderConfig,
}

impl AsyncFileReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a whole file as UTF-8 text.
    /// Without fail_fast, errors are reported in the stats and the content is empty.
    pub async fn read_file<P: AsRef<Path>>(&self, file_path: P) -> Result<(String, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of file: {}", path.display());

        match self.read_to_string(path).await {
            Ok(content) => {
                let stats = ReadStats {
                    bytes_read: content.len() as u64,
                    chars_read: content.chars().count() as u64,
                    read_error: None,
                };

                info!(
                    "Read {}: {} bytes, {} chars in {}ms",
                    path.display(),
                    stats.bytes_read,
                    stats.chars_read,
                    start_time.elapsed().as_millis()
                );

                Ok((content, stats))
            }
            Err(e) => {
                let error_msg = format!("Failed to read file {}: {}", path.display(), e);
                warn!("{}", error_msg);

                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error_msg));
                }

                let stats = ReadStats {
                    bytes_read: 0,
                    chars_read: 0,
                    read_error: Some(error_msg),
                };
                Ok((String::new(), stats))
            }
        }
    }

    async fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        let file = File::open(path).await?;
        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut content = String::new();
        // InvalidData here means the file is not UTF-8
        reader.read_to_string(&mut content).await?;
        Ok(content)
    }
}

/// Convenience function for reading a single file with default configuration
pub async fn read_file_async<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let reader = AsyncFileReader::new(ReaderConfig { fail_fast: true, ..Default::default() });
    let (content, _stats) = reader.read_file(file_path).await?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::fs;

    async fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> Result<std::path::PathBuf> {
        let file_path = dir.join(name);
        fs::write(&file_path, content).await?;
        Ok(file_path)
    }

    #[tokio::test]
    async fn test_read_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncFileReader::new(ReaderConfig::default());

        let content = "Line 1.\nLine 2!\r\nLine 3?";
        let file_path = create_test_file(temp_dir.path(), "test.txt", content.as_bytes()).await.unwrap();

        let (read, stats) = reader.read_file(&file_path).await.unwrap();

        assert_eq!(read, content);
        assert_eq!(stats.bytes_read, content.len() as u64);
        assert!(stats.read_error.is_none());
    }

    #[tokio::test]
    async fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncFileReader::new(ReaderConfig::default());

        let file_path = create_test_file(temp_dir.path(), "empty.txt", b"").await.unwrap();
        let (read, stats) = reader.read_file(&file_path).await.unwrap();

        assert_eq!(read, "");
        assert_eq!(stats.bytes_read, 0);
        assert!(stats.read_error.is_none());
    }

    #[tokio::test]
    async fn test_read_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncFileReader::new(ReaderConfig { fail_fast: false, ..Default::default() });

        let file_path = temp_dir.path().join("nonexistent.txt");
        let (read, stats) = reader.read_file(&file_path).await.unwrap();

        assert!(read.is_empty());
        assert!(stats.read_error.is_some());
    }

    #[tokio::test]
    async fn test_read_nonexistent_file_fail_fast() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncFileReader::new(ReaderConfig { fail_fast: true, ..Default::default() });

        let result = reader.read_file(temp_dir.path().join("nonexistent.txt")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_utf8_reported() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncFileReader::new(ReaderConfig::default());

        let file_path = create_test_file(temp_dir.path(), "bad.txt", &[0xFF, 0xFE, 0xFD]).await.unwrap();
        let (read, stats) = reader.read_file(&file_path).await.unwrap();

        assert!(read.is_empty());
        assert!(stats.read_error.is_some());
    }

    #[tokio::test]
    async fn test_unicode_char_count() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncFileReader::new(ReaderConfig { fail_fast: false, buffer_size: 4 });

        let content = "Привіт, світе.";
        let file_path = create_test_file(temp_dir.path(), "uk.txt", content.as_bytes()).await.unwrap();
        let (read, stats) = reader.read_file(&file_path).await.unwrap();

        assert_eq!(read, content);
        assert_eq!(stats.chars_read, 14);
        assert!(stats.bytes_read > stats.chars_read);
    }
}
