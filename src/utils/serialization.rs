use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use bincode;
use bincode::Options;

use crate::error::{Error, Result};

pub fn save_to_disk<T: Serialize, TPath: AsRef<Path>>(data: &T, path: TPath) -> Result<()> {
    let path = path.as_ref();
    let options = bincode::DefaultOptions::new();
    let options = options.with_no_limit();
    // Write all bytes to the target file
    let file = File::create(path).map_err(|e| Error::io(e, path))?;
    let writer = BufWriter::new(file);
    options.serialize_into(writer, data)?;
    Ok(())
}

pub fn load_from_disk<T: DeserializeOwned, TPath: AsRef<Path>>(path: TPath) -> Result<T> {
    let path = path.as_ref();
    // Open the file and read all bytes
    let file = File::open(path).map_err(|e| Error::io(e, path))?;
    let reader = BufReader::new(file);
    let options = bincode::DefaultOptions::new();
    let options = options.with_no_limit();
    Ok(options.deserialize_from(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let data = (3usize, vec!["cat".to_string(), "art".to_string()]);
        save_to_disk(&data, &path).unwrap();
        let loaded: (usize, Vec<String>) = load_from_disk(&path).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Vec<u8>> = load_from_disk(dir.path().join("missing.bin"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
