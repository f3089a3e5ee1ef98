use crate::ports::outbound::InputSource;
use crate::shared::error::GovError;
use crate::shared::Result;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// FileSystemSource adapter reading one or more files as a single stream
///
/// Files are concatenated byte-wise in the order given, before the stream
/// is split into lines. Nothing is deduplicated across files.
#[derive(Debug, Clone)]
pub struct FileSystemSource {
    paths: Vec<PathBuf>,
}

impl FileSystemSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Opens a single input path; anything readable except a directory is
    /// accepted (regular files, FIFOs, `/dev/stdin`, process substitution)
    fn open_file(path: &Path) -> Result<File> {
        let metadata = fs::metadata(path).map_err(|e| GovError::FileOpen {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        if metadata.is_dir() {
            return Err(GovError::FileOpen {
                path: path.to_path_buf(),
                details: "is a directory".to_string(),
            }
            .into());
        }

        File::open(path).map_err(|e| {
            GovError::FileOpen {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl InputSource for FileSystemSource {
    fn open(&mut self) -> Result<Box<dyn BufRead + '_>> {
        if self.paths.is_empty() {
            return Err(GovError::configuration("no input files given").into());
        }

        // Open everything up front; on failure the files opened so far are dropped here
        let files = self
            .paths
            .iter()
            .map(|path| Self::open_file(path))
            .collect::<Result<Vec<_>>>()?;

        let chained = files
            .into_iter()
            .fold(Box::new(io::empty()) as Box<dyn Read>, |stream, file| {
                Box::new(stream.chain(file)) as Box<dyn Read>
            });

        Ok(Box::new(BufReader::new(chained)))
    }

    fn describe(&self) -> String {
        match self.paths.as_slice() {
            [single] => single.display().to_string(),
            paths => format!("{} files", paths.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read_all(source: &mut FileSystemSource) -> String {
        let mut content = String::new();
        source
            .open()
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[test]
    fn test_open_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.txt");
        fs::write(&path, "dep\ta.example/one\tv1.0.0\th1:a=\n").unwrap();

        let mut source = FileSystemSource::new(vec![path]);
        assert_eq!(read_all(&mut source), "dep\ta.example/one\tv1.0.0\th1:a=\n");
    }

    #[test]
    fn test_open_concatenates_files_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.txt");
        let second = temp_dir.path().join("second.txt");
        fs::write(&first, "one\n").unwrap();
        fs::write(&second, "two\n").unwrap();

        let mut source = FileSystemSource::new(vec![second.clone(), first.clone()]);
        assert_eq!(read_all(&mut source), "two\none\n");

        let mut source = FileSystemSource::new(vec![first.clone(), second, first]);
        assert_eq!(read_all(&mut source), "one\ntwo\none\n");
    }

    #[test]
    fn test_open_joins_bytes_before_line_splitting() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.txt");
        let second = temp_dir.path().join("second.txt");
        fs::write(&first, "no newline").unwrap();
        fs::write(&second, " at end\n").unwrap();

        let mut source = FileSystemSource::new(vec![first, second]);
        assert_eq!(read_all(&mut source), "no newline at end\n");
    }

    #[test]
    fn test_open_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let present = temp_dir.path().join("present.txt");
        let missing = temp_dir.path().join("missing.txt");
        fs::write(&present, "dep\ta\tb\tc\n").unwrap();

        let mut source = FileSystemSource::new(vec![present, missing.clone()]);
        let err = source.open().err().unwrap();

        match err.downcast_ref::<GovError>() {
            Some(GovError::FileOpen { path, .. }) => assert_eq!(path, &missing),
            other => panic!("expected FileOpen, got {:?}", other),
        }
    }

    #[test]
    fn test_open_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();

        let mut source = FileSystemSource::new(vec![temp_dir.path().to_path_buf()]);
        let err = source.open().err().unwrap();
        assert!(format!("{}", err).contains("is a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_open_named_pipe() {
        let temp_dir = TempDir::new().unwrap();
        let fifo = temp_dir.path().join("build-info.pipe");
        let status = std::process::Command::new("mkfifo")
            .arg(&fifo)
            .status()
            .unwrap();
        assert!(status.success());

        let writer_path = fifo.clone();
        let writer = std::thread::spawn(move || {
            fs::write(writer_path, "\tdep\tcel.dev/expr\tv0.19.1\th1:x=\n").unwrap();
        });

        let mut source = FileSystemSource::new(vec![fifo]);
        assert_eq!(read_all(&mut source), "\tdep\tcel.dev/expr\tv0.19.1\th1:x=\n");
        writer.join().unwrap();
    }

    #[test]
    fn test_open_without_paths() {
        let mut source = FileSystemSource::new(vec![]);
        let err = source.open().err().unwrap();
        assert!(matches!(
            err.downcast_ref::<GovError>(),
            Some(GovError::Configuration { .. })
        ));
    }

    #[test]
    fn test_describe() {
        let source = FileSystemSource::new(vec![PathBuf::from("deps.txt")]);
        assert_eq!(source.describe(), "deps.txt");

        let source = FileSystemSource::new(vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(source.describe(), "2 files");
    }
}
