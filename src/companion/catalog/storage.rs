extern crate serde_json;

use super::Index;
use crate::error::{Error, Result};
use serde_json::{from_reader, to_writer_pretty};
use std::{
    fs::{self, File},
    io::{BufReader, ErrorKind, Read, Write},
    path::Path,
};

pub fn load<R: Read>(rdr: R) -> Result<Index> {
    Ok(from_reader(BufReader::new(rdr))?)
}
pub fn save<W: Write>(wdr: W, index: &Index) -> Result<()> {
    Ok(to_writer_pretty(wdr, index)?)
}

/// `Ok(None)` when the snapshot doesn't exist yet.
pub fn read(path: &Path) -> Result<Option<Index>> {
    match File::open(path) {
        Ok(f) => load(f).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path)(e)),
    }
}
pub fn write(path: &Path, index: &Index) -> Result<()> {
    let mut buf = Vec::new();
    save(&mut buf, index)?;
    fs::write(path, buf).map_err(Error::io(path))
}
