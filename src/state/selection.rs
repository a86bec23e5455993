//! Upload staging list: files picked or dropped but not yet submitted.
//!
//! DESIGN
//! ======
//! The store is plain data with no rendering or network concerns. The
//! `fileList` view is a pure projection of [`SelectionStore::rows`], and the
//! upload panel drives the `begin_upload` -> `complete_upload`/`fail_upload`
//! transitions around the single multipart request.
//!
//! Each staged entry gets a store-local sequence key so a finished upload can
//! remove exactly the entries it submitted, even if the user staged more files
//! while the request was in flight. Keys are never used for de-duplication:
//! the same file may be staged any number of times.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// A user-selected file waiting to be uploaded.
///
/// Metadata is copied out of the browser's file API at staging time; in the
/// browser build the original `File` handle is kept for the multipart body.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
    #[cfg(feature = "csr")]
    file: web_sys::File,
}

impl PendingFile {
    /// Build a pending file from plain metadata (host builds and tests).
    #[cfg(not(feature = "csr"))]
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Wrap a browser `File` handle.
    #[cfg(feature = "csr")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size().max(0.0) as u64,
            mime: file.type_(),
            file,
        }
    }

    /// Collect every file of a drop payload or picker selection, in order.
    #[cfg(feature = "csr")]
    pub fn from_file_list(list: &web_sys::FileList) -> Vec<Self> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(Self::from_file)
            .collect()
    }

    /// The underlying browser file handle.
    #[cfg(feature = "csr")]
    pub fn file(&self) -> &web_sys::File {
        &self.file
    }
}

/// One line of the rendered `fileList`.
///
/// `index` is the entry's position at the moment the rows were produced; the
/// remove action must use it immediately and never cache it across renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
    pub index: usize,
    pub key: u64,
    pub name: String,
}

/// Progress of the single in-flight upload, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

/// Reasons an upload is refused before any request is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadRejection {
    /// Nothing is staged.
    Empty,
    /// A previous upload has not finished yet.
    InFlight,
}

/// Snapshot of the entries handed to the submitter.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadBatch {
    keys: Vec<u64>,
    files: Vec<PendingFile>,
}

impl UploadBatch {
    pub fn files(&self) -> &[PendingFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
struct StagedEntry {
    key: u64,
    file: PendingFile,
}

/// Ordered, mutable collection of files staged for upload.
#[derive(Clone, Debug, Default)]
pub struct SelectionStore {
    entries: Vec<StagedEntry>,
    next_key: u64,
    status: UploadStatus,
}

impl SelectionStore {
    /// Append a batch of files to the end of the list, keeping batch order.
    /// No type or size constraints are applied.
    pub fn add_batch<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = PendingFile>,
    {
        for file in files {
            let key = self.next_key;
            self.next_key += 1;
            self.entries.push(StagedEntry { key, file });
        }
    }

    /// Remove the entry at `index`, shifting later entries left.
    /// Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<PendingFile> {
        if index >= self.entries.len() {
            return None;
        }
        Some(self.entries.remove(index).file)
    }

    /// Drop every staged entry and forget any finished upload status.
    pub fn clear(&mut self) {
        self.entries.clear();
        if self.status != UploadStatus::Uploading {
            self.status = UploadStatus::Idle;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Staged files in store order.
    pub fn files(&self) -> impl Iterator<Item = &PendingFile> {
        self.entries.iter().map(|e| &e.file)
    }

    /// Sum of all staged file sizes in bytes.
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.file.size).sum()
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    /// Render projection: one row per entry, in store order.
    pub fn rows(&self) -> Vec<FileRow> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, e)| FileRow {
                index,
                key: e.key,
                name: e.file.name.clone(),
            })
            .collect()
    }

    /// Snapshot the current entries for submission and mark the upload as
    /// in flight.
    ///
    /// # Errors
    ///
    /// Returns [`UploadRejection::Empty`] when nothing is staged, even while
    /// another upload is running, and [`UploadRejection::InFlight`] when files
    /// are staged but the previous request has not settled.
    pub fn begin_upload(&mut self) -> Result<UploadBatch, UploadRejection> {
        if self.entries.is_empty() {
            return Err(UploadRejection::Empty);
        }
        if self.status == UploadStatus::Uploading {
            return Err(UploadRejection::InFlight);
        }
        self.status = UploadStatus::Uploading;
        Ok(UploadBatch {
            keys: self.entries.iter().map(|e| e.key).collect(),
            files: self.entries.iter().map(|e| e.file.clone()).collect(),
        })
    }

    /// Mark the upload as succeeded and drop the entries it submitted.
    /// Entries staged after `begin_upload` stay in the list.
    pub fn complete_upload(&mut self, batch: &UploadBatch) {
        self.entries.retain(|e| !batch.keys.contains(&e.key));
        self.status = UploadStatus::Succeeded;
    }

    /// Mark the upload as failed, whether the request never completed or the
    /// server refused the files. Staged entries are kept for a retry.
    pub fn fail_upload(&mut self) {
        self.status = UploadStatus::Failed;
    }
}
