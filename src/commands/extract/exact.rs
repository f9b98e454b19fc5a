use std::{
    collections::HashSet,
    io::{Read, Write},
};

use anyhow::{anyhow, Result};

/// Keeps rows whose identifier column equals one of the identifiers.
///
/// Returns the number of rows written, not counting the header.
pub fn filter_rows<R: Read, W: Write>(
    ids: &[String],
    id_column: &str,
    reader: R,
    writer: &mut W,
    with_header: bool,
) -> Result<usize> {
    let wanted: HashSet<&[u8]> = ids.iter().map(String::as_bytes).collect();

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .flexible(true)
        .from_writer(writer);

    let headers = rdr.byte_headers()?.clone();
    let column = headers
        .iter()
        .position(|name| name == id_column.as_bytes())
        .ok_or_else(|| anyhow!("Metadata has no identifier column named `{id_column}`"))?;
    if with_header {
        wtr.write_byte_record(&headers)?;
    }

    let mut rows = 0;
    let mut record = csv::ByteRecord::new();
    while rdr.read_byte_record(&mut record)? {
        if record.get(column).is_some_and(|id| wanted.contains(id)) {
            wtr.write_byte_record(&record)?;
            rows += 1;
        }
    }
    wtr.flush()?;
    Ok(rows)
}
