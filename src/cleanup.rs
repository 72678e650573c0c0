use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Removes the file on drop unless it was persisted. Used for the temporary
/// output of a run so a failed run leaves nothing behind.
#[derive(Debug)]
pub struct AutoCleanFile {
    filename: PathBuf,
    keep: bool,
}

impl AutoCleanFile {
    pub fn new(fname: PathBuf) -> Self {
        Self {
            filename: fname,
            keep: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.filename
    }

    /// move the file to `dest`, replacing whatever is there
    pub fn persist<P: AsRef<Path>>(mut self, dest: P) -> io::Result<()> {
        fs::rename(&self.filename, dest)?;
        self.keep = true;
        Ok(())
    }
}

impl From<PathBuf> for AutoCleanFile {
    fn from(value: PathBuf) -> Self {
        Self::new(value)
    }
}

impl Drop for AutoCleanFile {
    fn drop(&mut self) {
        if !self.keep && self.filename.exists() {
            let _ = fs::remove_file(&self.filename);
        }
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::AutoCleanFile;

    #[test]
    fn test_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let fname = dir.path().join("tmp.fa");
        fs::write(&fname, ">a\n").unwrap();
        {
            let _guard = AutoCleanFile::from(fname.clone());
        }
        assert!(!fname.exists());
    }

    #[test]
    fn test_persist() {
        let dir = tempfile::tempdir().unwrap();
        let fname = dir.path().join("tmp.fa");
        let dest = dir.path().join("out.fa");
        fs::write(&fname, ">a\n").unwrap();
        fs::write(&dest, "old").unwrap();

        let guard = AutoCleanFile::new(fname.clone());
        assert_eq!(guard.path(), fname.as_path());
        guard.persist(&dest).unwrap();

        assert!(!fname.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), ">a\n");
    }
}
