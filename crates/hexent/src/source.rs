use crate::encoding::TextEncoding;
use crate::error::{HexentError, Result};
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Literal(String),
    File(PathBuf),
    Stdin,
}

impl Input {
    /// A literal string wins over a file, and a file wins over stdin.
    pub fn select(literal: Option<&str>, file: Option<&Path>) -> Self {
        match (literal, file) {
            (Some(text), _) => Input::Literal(text.to_string()),
            (None, Some(path)) => Input::File(path.to_path_buf()),
            (None, None) => Input::Stdin,
        }
    }

    pub fn read(&self, encoding: TextEncoding) -> Result<String> {
        match self {
            Input::Literal(text) => Ok(text.clone()),
            Input::File(path) => read_file(path, encoding),
            Input::Stdin => {
                let mut content = String::new();
                std::io::stdin().read_to_string(&mut content)?;
                log::debug!("read {} bytes from stdin", content.len());
                Ok(content)
            }
        }
    }
}

fn read_file(path: &Path, encoding: TextEncoding) -> Result<String> {
    let bytes = fs::read(path).map_err(|error| match error.kind() {
        ErrorKind::NotFound => HexentError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => HexentError::Read {
            path: path.to_path_buf(),
            source: error,
        },
    })?;
    log::debug!(
        "read {} bytes from {} as {}",
        bytes.len(),
        path.display(),
        encoding.name()
    );

    encoding
        .decode(&bytes)
        .ok_or_else(|| HexentError::Undecodable {
            path: path.to_path_buf(),
            encoding: encoding.name().to_string(),
        })
}

pub fn write_output(path: &Path, content: &str, encoding: TextEncoding) -> Result<()> {
    let bytes = encoding
        .encode(content)
        .ok_or_else(|| HexentError::Unmappable {
            path: path.to_path_buf(),
            encoding: encoding.name().to_string(),
        })?;
    fs::write(path, &bytes).map_err(|error| HexentError::Write {
        path: path.to_path_buf(),
        source: error,
    })?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_select_precedence() {
        let path = Path::new("input.txt");
        assert_eq!(
            Input::select(Some("text"), Some(path)),
            Input::Literal("text".to_string())
        );
        assert_eq!(
            Input::select(None, Some(path)),
            Input::File(PathBuf::from("input.txt"))
        );
        assert_eq!(Input::select(None, None), Input::Stdin);
    }

    #[test]
    fn test_read_literal() {
        let input = Input::Literal("&#x41;".to_string());
        assert_eq!(input.read(TextEncoding::default()).unwrap(), "&#x41;");
    }

    #[test]
    fn test_read_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "héllo\n").unwrap();

        let content = Input::File(path).read(TextEncoding::default()).unwrap();
        assert_eq!(content, "héllo\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let error = Input::File(path.clone())
            .read(TextEncoding::default())
            .unwrap_err();
        match error {
            HexentError::FileNotFound { path: reported } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_undecodable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [0x63, 0x61, 0x66, 0xE9]).unwrap();

        let error = Input::File(path.clone())
            .read(TextEncoding::default())
            .unwrap_err();
        assert!(matches!(error, HexentError::Undecodable { .. }));
        assert!(error.to_string().contains("UTF-8"));

        let latin1 = TextEncoding::from_label("latin1").unwrap();
        assert_eq!(Input::File(path).read(latin1).unwrap(), "café");
    }

    #[test]
    fn test_write_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_output(&path, "&#x41;", TextEncoding::default()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "&#x41;");
    }

    #[test]
    fn test_write_output_unmappable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let latin1 = TextEncoding::from_label("latin1").unwrap();

        let error = write_output(&path, "😀", latin1).unwrap_err();
        assert!(matches!(error, HexentError::Unmappable { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_output_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");

        let error = write_output(&path, "x", TextEncoding::default()).unwrap_err();
        assert!(matches!(error, HexentError::Write { .. }));
    }
}
