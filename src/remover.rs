use std::fs;
use std::io;
use std::path::Path;

/// The delete primitive a sweep uses for every matched file.
pub trait FileRemover {
    fn remove(&self, path: &Path) -> io::Result<()>;
}

/// Permanent removal through the filesystem. No trash, no undo.
pub struct FsRemover;

impl FileRemover for FsRemover {
    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_removes_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("a.tmp");
        fs::write(&path, "x").unwrap();
        FsRemover.remove(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let tmp = tempdir().unwrap();
        let err = FsRemover.remove(&tmp.path().join("gone.tmp")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_refuses_directory() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("sub.tmp");
        fs::create_dir(&dir).unwrap();
        assert!(FsRemover.remove(&dir).is_err());
        assert!(dir.is_dir());
    }
}
