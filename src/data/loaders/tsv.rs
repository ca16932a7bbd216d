// tsv.rs - Tab-separated allele call table loader

use crate::data::profile::{Sample, SampleTable};
use crate::encoding::AlleleEncoding;
use crate::error::{CgmlstError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Options controlling how an allele table is read
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub encoding: AlleleEncoding,
    /// Refuse tables with more samples than this
    pub max_samples: Option<usize>,
}

impl SampleTable {
    /// Load an allele call table from a file
    pub fn from_tsv(file_path: &Path, options: LoadOptions) -> Result<Self> {
        let file = File::open(file_path).map_err(|source| CgmlstError::Open {
            source,
            path: file_path.to_path_buf(),
        })?;
        Self::from_tsv_reader(BufReader::new(file), options)
    }

    /// Load an allele call table from any reader.
    ///
    /// The first line is the header and only fixes the number of loci. Every
    /// following line is `sample_id<TAB>allele...` with exactly that many
    /// alleles. Blank lines are skipped.
    pub fn from_tsv_reader<R: Read>(reader: R, options: LoadOptions) -> Result<Self> {
        // (1-based line number, line without its terminator), blank lines dropped
        let mut lines = BufReader::new(reader)
            .split(b'\n')
            .enumerate()
            .map(|(index, line)| line.map(|l| (index as u64 + 1, strip_cr(l))))
            .filter(|line| !matches!(line, Ok((_, l)) if l.is_empty()));

        let (_, header) = lines.next().ok_or(CgmlstError::EmptyInput)??;
        let ncol = header.split(|&b| b == b'\t').count() - 1;
        if ncol == 0 {
            return Err(CgmlstError::NoLoci);
        }

        let encoder = options.encoding.encoder();
        let mut table = SampleTable::new(ncol);

        for line in lines {
            let (line, text) = line?;
            let mut fields = text.split(|&b| b == b'\t');

            let id = fields.next().unwrap_or_default().trim_ascii();
            if id.is_empty() {
                return Err(CgmlstError::EmptySampleId { line });
            }

            let alleles: Vec<_> = fields.map(|f| encoder.encode(f)).collect();
            if alleles.len() != ncol {
                return Err(CgmlstError::ColumnCount {
                    line,
                    found: alleles.len(),
                    expected: ncol,
                });
            }

            if let Some(limit) = options.max_samples {
                if table.len() >= limit {
                    return Err(CgmlstError::TooManySamples { limit });
                }
            }

            table.push(Sample {
                id: String::from_utf8_lossy(id).into_owned(),
                alleles,
            });
        }

        Ok(table)
    }
}

fn strip_cr(mut line: Vec<u8>) -> Vec<u8> {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::MISSING;

    fn load(text: &str) -> Result<SampleTable> {
        SampleTable::from_tsv_reader(text.as_bytes(), LoadOptions::default())
    }

    #[test]
    fn test_basic_table() {
        let table = load("ID\tg1\tg2\tg3\nA\t1\t2\t3\nB\t1\t5\t3\nC\t0\t2\t9\n").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.ncol(), 3);
        assert_eq!(table.sample_ids(), vec!["A", "B", "C"]);
        assert_eq!(table.samples()[2].alleles, vec![0, 2, 9]);
    }

    #[test]
    fn test_qc_codes_and_crlf() {
        let table = load("FILE\tl1\tl2\tl3\tl4\r\nS1\tINF-12\tLNF\tPLOT5\t4\r\n").unwrap();
        assert_eq!(table.samples()[0].alleles, vec![12, MISSING, MISSING, 4]);
    }

    #[test]
    fn test_empty_field_is_missing() {
        let table = load("ID\tg1\tg2\nA\t\t7\n").unwrap();
        assert_eq!(table.samples()[0].alleles, vec![MISSING, 7]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = load("ID\tg1\n\nA\t1\n\nB\t2\n").unwrap();
        assert_eq!(table.sample_ids(), vec!["A", "B"]);
    }

    #[test]
    fn test_column_mismatch_reports_line() {
        let err = load("ID\tg1\tg2\nA\t1\t2\nB\t1\n").unwrap_err();
        match err {
            CgmlstError::ColumnCount {
                line,
                found,
                expected,
            } => {
                assert_eq!(line, 3);
                assert_eq!(found, 1);
                assert_eq!(expected, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let err = load("ID\tg1\tg2\n\nA\t1\t2\n\nB\t1\n").unwrap_err();
        assert!(matches!(err, CgmlstError::ColumnCount { line: 5, found: 1, expected: 2 }));
        assert_eq!(err.to_string(), "line 5 has 1 allele columns, expected 2");

        let err = load("\r\nID\tg1\r\nA\t1\r\n\r\n\t2\r\n").unwrap_err();
        assert!(matches!(err, CgmlstError::EmptySampleId { line: 5 }));
    }

    #[test]
    fn test_empty_sample_id() {
        let err = load("ID\tg1\nA\t1\n\t2\n").unwrap_err();
        assert!(matches!(err, CgmlstError::EmptySampleId { line: 3 }));
    }

    #[test]
    fn test_empty_input_and_no_loci() {
        assert!(matches!(load("").unwrap_err(), CgmlstError::EmptyInput));
        assert!(matches!(load("ID\nA\n").unwrap_err(), CgmlstError::NoLoci));
    }

    #[test]
    fn test_header_only_gives_empty_table() {
        let table = load("ID\tg1\tg2\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.ncol(), 2);
    }

    #[test]
    fn test_sample_limit() {
        let options = LoadOptions {
            max_samples: Some(2),
            ..LoadOptions::default()
        };
        let text = "ID\tg1\nA\t1\nB\t2\n";
        assert_eq!(SampleTable::from_tsv_reader(text.as_bytes(), options).unwrap().len(), 2);

        let text = "ID\tg1\nA\t1\nB\t2\nC\t3\n";
        let err = SampleTable::from_tsv_reader(text.as_bytes(), options).unwrap_err();
        assert!(matches!(err, CgmlstError::TooManySamples { limit: 2 }));
    }

    #[test]
    fn test_digest_table() {
        let options = LoadOptions {
            encoding: AlleleEncoding::Digest,
            ..LoadOptions::default()
        };
        let text = "ID\tg1\tg2\nA\tab12\tLNF\n";
        let table = SampleTable::from_tsv_reader(text.as_bytes(), options).unwrap();
        assert_eq!(table.samples()[0].alleles, vec![0xab12, MISSING]);
    }

    #[test]
    fn test_missing_file() {
        let err = SampleTable::from_tsv(Path::new("/nonexistent/calls.tsv"), LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, CgmlstError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/calls.tsv"));
    }
}
