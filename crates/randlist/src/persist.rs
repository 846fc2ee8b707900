//! File-backed persistence for [`RandList`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use randlist_core::{codec, CodecError, RandList};

use crate::error::{PersistError, Result};

/// Encode `list` into the file at `path`, creating or truncating it.
pub fn save_to_path<P: AsRef<Path>>(list: &RandList, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| PersistError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut sink = BufWriter::new(file);
    codec::encode(list, &mut sink)?;
    sink.flush().map_err(CodecError::from)?;

    tracing::debug!(len = list.len(), path = %path.display(), "list saved");
    Ok(())
}

/// Decode the file at `path` into a newly built list.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<RandList> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PersistError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let list = codec::decode(BufReader::new(file))?;

    tracing::debug!(len = list.len(), path = %path.display(), "list loaded");
    Ok(list)
}
