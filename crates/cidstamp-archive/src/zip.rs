use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ::zip::result::ZipError;

use crate::error::{Error, Result};
use crate::reader::{Archive, ArchiveReader, EntryRef};

/// Opens zip-compatible containers from disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZipReader;

impl ArchiveReader for ZipReader {
    type Archive = ZipArchive;

    fn open(&self, path: &Path) -> Result<ZipArchive> {
        let file = File::open(path).map_err(|e| Error::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        let archive = ::zip::ZipArchive::new(BufReader::new(file)).map_err(|e| {
            Error::NotAnArchive {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
        Ok(ZipArchive { archive })
    }
}

pub struct ZipArchive {
    archive: ::zip::ZipArchive<BufReader<File>>,
}

impl Archive for ZipArchive {
    fn entry_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_owned).collect()
    }

    fn find_entry(&self, name: &str) -> Option<EntryRef> {
        // zip marks directories with a trailing slash
        if name.ends_with('/') {
            return None;
        }
        let index = self.archive.index_for_name(name)?;
        Some(EntryRef {
            name: name.to_owned(),
            index,
        })
    }

    fn read_bytes(&mut self, entry: &EntryRef) -> Result<Vec<u8>> {
        let mut file = self.archive.by_index(entry.index).map_err(|e| match e {
            ZipError::FileNotFound => Error::EntryNotFound(entry.name.clone()),
            other => Error::Corrupted {
                entry: entry.name.clone(),
                reason: other.to_string(),
            },
        })?;
        if file.name() != entry.name || file.is_dir() {
            return Err(Error::EntryNotFound(entry.name.clone()));
        }

        let mut content = Vec::new();
        file.read_to_end(&mut content).map_err(|e| Error::Corrupted {
            entry: entry.name.clone(),
            reason: e.to_string(),
        })?;
        Ok(content)
    }
}
