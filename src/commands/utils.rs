use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

pub fn match_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    if let Some(path) = path {
        let handle =
            File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
        let buffer = BufReader::new(handle);
        let boxed = Box::new(buffer);
        Ok(boxed)
    } else {
        let handle = io::stdin();
        let buffer = BufReader::new(handle);
        let boxed = Box::new(buffer);
        Ok(boxed)
    }
}

pub fn match_output(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    if let Some(path) = path {
        open_output(path, false)
    } else {
        let handle = io::stdout();
        let buffer = BufWriter::new(handle);
        let boxed = Box::new(buffer);
        Ok(boxed)
    }
}

/// Opens a file for writing, either truncating it or appending to it
pub fn open_output(path: &Path, append: bool) -> Result<Box<dyn Write + Send>> {
    let handle = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .with_context(|| format!("Could not open {} for writing", path.display()))?;
    let buffer = BufWriter::new(handle);
    let boxed = Box::new(buffer);
    Ok(boxed)
}
