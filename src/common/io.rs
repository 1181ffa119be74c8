use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Open `path` for reading without touching its access time where the
/// platform allows it.
#[cfg(target_os = "linux")]
fn open_for_read(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    let noatime = std::fs::OpenOptions::new()
        .read(true)
        .custom_flags(libc::O_NOATIME)
        .open(path);
    match noatime {
        // O_NOATIME is refused unless we own the file
        Err(e) if e.raw_os_error() == Some(libc::EPERM) => File::open(path),
        other => other,
    }
}

#[cfg(not(target_os = "linux"))]
fn open_for_read(path: &Path) -> io::Result<File> {
    File::open(path)
}

/// Read a whole name list into memory. The handle is dropped before
/// returning, on success and on error.
pub fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = open_for_read(path)?;
    let metadata = file.metadata()?;
    if metadata.is_dir() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "Is a directory"));
    }
    // Special files report zero length; the Vec grows as needed.
    let mut buf = Vec::with_capacity(metadata.len() as usize);
    file.read_to_end(&mut buf)?;
    Ok(buf)
}
