// mod.rs - Distance matrix writer

use crate::core::DistanceMatrix;
use crate::error::{CgmlstError, Result};
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::ops::Range;
use std::path::Path;

/// First token of the header line
pub const HEADER_TOKEN: &str = crate::EXENAME;

/// Which part of the symmetric matrix to emit. The diagonal is always included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    Lower,
    Upper,
    #[default]
    Full,
}

impl Layout {
    /// Map the command-line code: 1 = lower, 2 = upper, 3 = full
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Layout::Lower),
            2 => Ok(Layout::Upper),
            3 => Ok(Layout::Full),
            _ => Err(CgmlstError::InvalidArgument(format!(
                "Invalid output mode {}. Use: 1=lower-tri 2=upper-tri 3=full",
                code
            ))),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Layout::Lower => 1,
            Layout::Upper => 2,
            Layout::Full => 3,
        }
    }

    /// Columns emitted for `row` of an `n × n` matrix
    pub fn column_range(self, row: usize, n: usize) -> Range<usize> {
        match self {
            Layout::Lower => 0..row + 1,
            Layout::Upper => row..n,
            Layout::Full => 0..n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Tab,
    Comma,
}

impl Separator {
    pub fn from_csv_flag(csv: bool) -> Self {
        if csv {
            Separator::Comma
        } else {
            Separator::Tab
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Separator::Tab => b'\t',
            Separator::Comma => b',',
        }
    }
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|source| CgmlstError::Write {
                source,
                target: parent.display().to_string(),
            })?;
        }
    }
    Ok(())
}

/// Write the header and one line per sample.
///
/// Fields are written verbatim, never quoted.
pub fn write_matrix<W: Write>(
    writer: W,
    sample_ids: &[&str],
    matrix: &DistanceMatrix,
    layout: Layout,
    separator: Separator,
) -> std::result::Result<(), csv::Error> {
    debug_assert_eq!(sample_ids.len(), matrix.size());
    let n = matrix.size();

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(separator.as_byte())
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .has_headers(false)
        .from_writer(writer);

    wtr.write_field(HEADER_TOKEN)?;
    for id in sample_ids {
        wtr.write_field(id)?;
    }
    wtr.write_record(None::<&[u8]>)?;

    let mut cell: Vec<u8> = Vec::with_capacity(10);
    for (j, id) in sample_ids.iter().enumerate() {
        wtr.write_field(id)?;
        let row = matrix.row(j);
        for value in &row[layout.column_range(j, n)] {
            cell.clear();
            write!(cell, "{}", value)?;
            wtr.write_field(&cell)?;
        }
        wtr.write_record(None::<&[u8]>)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the matrix to a file, or to stdout when no path is given
pub fn write_matrix_to(
    output: Option<&Path>,
    sample_ids: &[&str],
    matrix: &DistanceMatrix,
    layout: Layout,
    separator: Separator,
) -> Result<()> {
    match output {
        Some(path) => {
            ensure_parent_dir(path)?;
            let target = path.display().to_string();
            let file = File::create(path).map_err(|source| CgmlstError::Write {
                source,
                target: target.clone(),
            })?;
            write_matrix(BufWriter::new(file), sample_ids, matrix, layout, separator)
                .map_err(|e| CgmlstError::Write {
                    source: e.into(),
                    target,
                })
        }
        None => {
            let stdout = io::stdout();
            write_matrix(
                BufWriter::new(stdout.lock()),
                sample_ids,
                matrix,
                layout,
                separator,
            )
            .map_err(|e| CgmlstError::Write {
                source: e.into(),
                target: "stdout".to_string(),
            })
        }
    }
}
