// A file-backed managed resource with an explicit lifecycle.
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::ResourceError;
use crate::scope::{Close, Outcome, Scoped};

/// Where a managed resource is in its life.
///
/// The only legal transitions are `Unacquired -> Acquired` (a fallible
/// open) and `Acquired -> Released` (the close). A released resource is
/// spent; it cannot be reacquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Unacquired,
    Acquired,
    Released,
}

/// A readable text source with acquire/read/release operations and a
/// checked lifecycle.
///
/// Construction does not touch the filesystem; the open happens in
/// [`FileResource::acquire`] and can fail. Misordered calls (reading
/// before acquiring, releasing twice) are reported as [`ResourceError`]
/// values rather than being silently tolerated.
#[derive(Debug)]
pub struct FileResource {
    path: PathBuf,
    state: Lifecycle,
    handle: Option<File>,
}

impl FileResource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileResource {
            path: path.into(),
            state: Lifecycle::Unacquired,
            handle: None,
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the source for reading. Fails without changing state if the
    /// open fails, and rejects a second acquisition.
    pub fn acquire(&mut self) -> Result<(), ResourceError> {
        match self.state {
            Lifecycle::Unacquired => {
                self.handle = Some(File::open(&self.path)?);
                self.state = Lifecycle::Acquired;
                Ok(())
            }
            Lifecycle::Acquired => Err(ResourceError::AlreadyAcquired),
            Lifecycle::Released => Err(ResourceError::AlreadyReleased),
        }
    }

    /// Read the entire contents as one string.
    pub fn read_all(&mut self) -> Result<String, ResourceError> {
        let handle = self.handle.as_mut().ok_or(ResourceError::NotAcquired)?;
        let mut contents = String::new();
        handle.read_to_string(&mut contents)?;
        Ok(contents)
    }

    /// Close the handle. Only legal once, and only after a successful
    /// acquisition.
    pub fn release(&mut self) -> Result<(), ResourceError> {
        match self.state {
            Lifecycle::Acquired => {
                // Dropping the handle closes the descriptor.
                self.handle = None;
                self.state = Lifecycle::Released;
                Ok(())
            }
            Lifecycle::Unacquired => Err(ResourceError::NotAcquired),
            Lifecycle::Released => Err(ResourceError::AlreadyReleased),
        }
    }
}

/// The enter/exit protocol over the same lifecycle: `enter` acquires and
/// lends the open handle to the scope, `exit` takes it back and releases.
/// The scope owns the handle exclusively for the duration of the body.
impl Scoped for FileResource {
    type Resource = File;
    type Error = ResourceError;

    fn enter(&mut self) -> Result<File, ResourceError> {
        self.acquire()?;
        self.handle.take().ok_or(ResourceError::NotAcquired)
    }

    fn exit(&mut self, handle: File, _outcome: Outcome) -> Result<(), ResourceError> {
        self.handle = Some(handle);
        self.release()
    }
}

/// An already-open text file, for use with [`crate::scope::closing`].
#[derive(Debug)]
pub struct FileText {
    file: File,
}

impl FileText {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(FileText {
            file: File::open(path)?,
        })
    }

    pub fn read_all(&mut self) -> io::Result<String> {
        let mut contents = String::new();
        self.file.read_to_string(&mut contents)?;
        Ok(contents)
    }
}

impl Close for FileText {
    type Error = io::Error;

    fn close(self) -> Result<(), io::Error> {
        drop(self.file);
        Ok(())
    }
}
