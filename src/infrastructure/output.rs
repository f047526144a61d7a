//! Output sinks for emitted documents

use crate::domain::{emit, Document};
use crate::error::Result;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where an emitted document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` means stdout, anything else is a file path
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(arg.to_path_buf())
        }
    }

    /// Emit `doc` into this target.
    ///
    /// The file handle is closed on every path. If emission fails partway and
    /// the target is a regular file, the incomplete file is removed.
    pub fn write(&self, doc: &Document) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                let stdout = io::stdout();
                emit(doc, stdout.lock())?;
                Ok(())
            }
            OutputTarget::File(path) => write_file(doc, path),
        }
    }
}

fn write_file(doc: &Document, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    // Device files such as /dev/full must never be unlinked
    let regular = file.metadata()?.is_file();
    emit_or_discard(doc, path, BufWriter::new(file), regular)
}

/// Emit into a sink opened for `path`. The sink is dropped before the
/// partial file is removed.
fn emit_or_discard<W: Write>(
    doc: &Document,
    path: &Path,
    sink: W,
    discard_on_error: bool,
) -> Result<()> {
    if let Err(e) = emit(doc, sink) {
        if discard_on_error {
            warn!(path = %path.display(), error = %e, "emission failed, removing partial output");
            let _ = fs::remove_file(path);
        } else {
            warn!(path = %path.display(), error = %e, "emission failed");
        }
        return Err(e.into());
    }

    let bytes = fs::metadata(path).map(|m| m.len()).unwrap_or_default();
    debug!(path = %path.display(), bytes, "document written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Identifier, Package, Product};
    use tempfile::TempDir;

    #[test]
    fn test_from_arg() {
        assert_eq!(OutputTarget::from_arg(Path::new("-")), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_arg(Path::new("out.wxs")),
            OutputTarget::File(PathBuf::from("out.wxs"))
        );
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("build").join("product.wxs");

        OutputTarget::File(path.clone())
            .write(&sample_document())
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<?xml"));
        assert!(written.ends_with("</Wix>"));
    }

    /// Accepts a few bytes, then reports a full disk
    struct FullDisk {
        remaining: usize,
    }

    impl Write for FullDisk {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "no space left"));
            }
            let n = buf.len().min(self.remaining);
            self.remaining -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sample_document() -> Document {
        let mut doc = Document::new();
        doc.attach_product(Product::new().with_id(Identifier::new()))
            .attach_package(Package::new());
        doc
    }

    #[test]
    fn test_failed_emission_removes_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("product.wxs");
        fs::write(&path, "<?xml").unwrap();

        let result = emit_or_discard(&sample_document(), &path, FullDisk { remaining: 5 }, true);

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_emission_keeps_non_regular_target() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("product.wxs");
        fs::write(&path, "keep").unwrap();

        let result = emit_or_discard(&sample_document(), &path, FullDisk { remaining: 0 }, false);

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_device_file_is_not_removed() {
        let device = Path::new("/dev/full");
        if !device.exists() {
            return;
        }

        let result = OutputTarget::File(device.to_path_buf()).write(&sample_document());

        assert!(result.is_err());
        assert!(device.exists());
    }

    #[test]
    fn test_write_into_directory_fails() {
        let temp = TempDir::new().unwrap();
        let result = OutputTarget::File(temp.path().to_path_buf()).write(&Document::new());
        assert!(result.is_err());
    }
}
