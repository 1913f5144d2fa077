use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

/// Report destination: stdout unless `--output` names a file.
pub enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

/// Workspace root this binary was built from.
const WORKSPACE_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/..");

/// `path` as given when it exists or is absolute, otherwise relative to the
/// workspace root when the file is found there.
pub fn resolve_asset(path: &Path) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }
    let rooted = Path::new(WORKSPACE_ROOT).join(path);
    if rooted.exists() {
        log::debug!("resolved {} to {}", path.display(), rooted.display());
        rooted
    } else {
        path.to_path_buf()
    }
}

/// `value` rounded to `decimals` places.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_target_writes_through() {
        let path = std::env::temp_dir().join(format!(
            "salescast-output-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let mut target = OutputTarget::new(Some(path.clone())).unwrap();
        assert!(target.is_file());
        writeln!(target, "hello").unwrap();
        target.flush().unwrap();
        drop(target);
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello\n");
    }

    #[test]
    fn relative_assets_fall_back_to_workspace_root() {
        // Tests run from the crate directory, where the relative default is absent.
        let default = Path::new("salescast-web/static/data/model.json");
        assert!(resolve_asset(default).exists());

        let missing = Path::new("no/such/asset.csv");
        assert_eq!(resolve_asset(missing), missing.to_path_buf());
    }

    #[test]
    fn fixed_formats_decimals() {
        assert_eq!(fixed(1.0, 2), "1.00");
        assert_eq!(fixed(0.456, 2), "0.46");
    }
}
