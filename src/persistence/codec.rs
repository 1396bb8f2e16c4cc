//! Moves a [`Table`] to and from the inventory file.
//!
//! The file holds one record per line as `id,title,artist` with no header.
//! Plain fields are written as-is; a field holding a comma, a double quote or
//! a line break is quoted the usual CSV way so it survives a reload.
//!
//! On the way in, fields are taken verbatim except for the id, which may
//! carry surrounding spaces. A field that opens with a double quote has to be
//! a complete quoted field; a stray or unbalanced quote fails the load with
//! a reason naming the field rather than being reinterpreted.
//!
//! Every function opens the file, does the whole job and drops the handle
//! before returning. Nothing is staged through a temporary file, so a save
//! that fails halfway leaves a partially written file behind.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use log::{debug, info};

use super::error::InventoryError;
use super::record::{Record, parse_id};
use super::table::Table;

const FIELD_COUNT: usize = 3;

pub fn ensure_exists(path: impl AsRef<Path>) -> Result<(), InventoryError> {
    //! Create an empty inventory file at `path` if there is none yet.
    //!
    //! An existing file is opened in append mode and closed again, so its
    //! contents are never touched.

    let path = path.as_ref();
    if !path.exists() {
        info!("creating empty inventory file '{}'", path.display());
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| InventoryError::io(path, e))?;
    Ok(())
}

pub fn load(path: impl AsRef<Path>, table: &mut Table) -> Result<usize, InventoryError> {
    //! Replace the contents of `table` with the records stored at `path`.
    //!
    //! The whole file is parsed before the table is touched, so a malformed
    //! line leaves the table as it was and comes back as
    //! [`InventoryError::Malformed`].
    //!
    //! Returns the number of records loaded.

    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| InventoryError::io(path, e))?;
    let contents = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        malformed(
            path,
            line_of(valid),
            "the file is not valid UTF-8".to_string(),
        )
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(contents.as_bytes());

    let mut rows = Vec::new();
    let mut fields = StringRecord::new();
    loop {
        let start = reader.position().byte() as usize;
        if !reader
            .read_record(&mut fields)
            .map_err(|e| from_csv_error(path, e))?
        {
            break;
        }
        let end = reader.position().byte() as usize;

        let line = fields.position().map_or(0, |position| position.line());
        let raw = contents
            .get(start..end)
            .unwrap_or_default()
            .trim_matches(['\r', '\n']);

        check_quoting(path, line, raw, &fields)?;
        rows.push(parse_line(path, line, &fields)?);
    }

    let n_rows = rows.len();
    table.replace(rows);
    debug!("loaded {} record(s) from '{}'", n_rows, path.display());
    Ok(n_rows)
}

pub fn save(path: impl AsRef<Path>, table: &Table) -> Result<usize, InventoryError> {
    //! Overwrite the file at `path` with every record of `table`, one line
    //! per record, in table order.
    //!
    //! Returns the number of records written.

    let path = path.as_ref();
    let file = File::create(path).map_err(|e| InventoryError::io(path, e))?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    for record in table.iter() {
        writer
            .serialize(record)
            .map_err(|e| from_csv_error(path, e))?;
    }
    writer.flush().map_err(|e| InventoryError::io(path, e))?;

    debug!("saved {} record(s) to '{}'", table.len(), path.display());
    Ok(table.len())
}

fn parse_line(path: &Path, line: u64, fields: &StringRecord) -> Result<Record, InventoryError> {
    if fields.len() != FIELD_COUNT {
        return Err(malformed(
            path,
            line,
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    let id = parse_id(&fields[0]).map_err(|_| {
        malformed(path, line, format!("id '{}' is not an integer", &fields[0]))
    })?;
    Ok(Record::new(id, &fields[1], &fields[2]))
}

fn check_quoting(
    path: &Path,
    line: u64,
    raw: &str,
    fields: &StringRecord,
) -> Result<(), InventoryError> {
    //! Make sure every field reads back exactly as it is written on disk.
    //!
    //! A field that starts with a double quote must be one complete quoted
    //! field (`"..."` with `""` for an embedded quote). Anything else, like
    //! `"Weird" Al` or a quote that is never closed, is rejected instead of
    //! being silently merged or cut.

    let mut rest = raw;
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            rest = rest.strip_prefix(',').unwrap_or(rest);
        }

        let expected = if rest.starts_with('"') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        };

        rest = match rest.strip_prefix(expected.as_str()) {
            Some(after) if after.is_empty() || after.starts_with(',') => after,
            _ => {
                return Err(malformed(
                    path,
                    line,
                    format!(
                        "field {} has a stray or unbalanced double quote",
                        index + 1
                    ),
                ));
            }
        };
    }

    Ok(())
}

fn line_of(text: &[u8]) -> u64 {
    text.iter().filter(|&&byte| byte == b'\n').count() as u64 + 1
}

fn malformed(path: &Path, line: u64, reason: String) -> InventoryError {
    InventoryError::Malformed {
        path: path.to_path_buf(),
        line,
        reason,
    }
}

fn from_csv_error(path: &Path, error: csv::Error) -> InventoryError {
    let line = error.position().map_or(0, |position| position.line());
    let reason = error.to_string();

    match error.into_kind() {
        csv::ErrorKind::Io(source) => InventoryError::io(path, source),
        _ => malformed(path, line, reason),
    }
}
