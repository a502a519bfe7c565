//! Reading `x,y` records from a text stream.

use std::io::BufRead;

use crate::error::{PlotError, Result};

/// One parsed input line: its first and second comma-separated fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub x: f64,
    pub y: f64,
}

impl Record {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Parse a line of the form `<number>,<number>[,...]`.
    ///
    /// Surrounding whitespace of each field is ignored, as are fields
    /// after the second.  `line_no` is only used to report errors.
    pub fn parse(line: &str, line_no: usize) -> Result<Record> {
        let mut fields = line.split(',');
        let x = parse_field(fields.next(), line_no, "first")?;
        let y = parse_field(fields.next(), line_no, "second")?;
        Ok(Record { x, y })
    }
}

fn parse_field(field: Option<&str>, line: usize, which: &str) -> Result<f64> {
    let field = field.ok_or_else(|| PlotError::Parse {
        line,
        reason: format!("missing {which} field"),
    })?;
    field.trim().parse().map_err(|e| PlotError::Parse {
        line,
        reason: format!("{which} field {field:?}: {e}"),
    })
}

/// Read records until the end of `input`.
///
/// All or nothing: the first malformed line aborts the read and no
/// record is returned.
pub fn read_records<R: BufRead>(input: R) -> Result<Vec<Record>> {
    let records = input
        .lines()
        .enumerate()
        .map(|(i, line)| Record::parse(&line?, i + 1))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = records.len(), "read records");
    Ok(records)
}

/// Read records from standard input.
pub fn read_stdin() -> Result<Vec<Record>> {
    read_records(std::io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(s: &str) -> Result<Vec<Record>> {
        read_records(s.as_bytes())
    }

    #[test]
    fn empty_input() -> Result<()> {
        assert!(read("")?.is_empty());
        Ok(())
    }

    #[test]
    fn lines_in_order() -> Result<()> {
        let records = read("1,2\n3,4\n5,6\n")?;
        assert_eq!(records, vec![Record::new(1., 2.),
                                 Record::new(3., 4.),
                                 Record::new(5., 6.)]);
        Ok(())
    }

    #[test]
    fn last_line_without_newline() -> Result<()> {
        assert_eq!(read("0,10\n1,5")?,
                   vec![Record::new(0., 10.), Record::new(1., 5.)]);
        Ok(())
    }

    #[test]
    fn extra_fields_are_ignored() -> Result<()> {
        assert_eq!(read("1,2,3\n4,5,oops\n")?,
                   vec![Record::new(1., 2.), Record::new(4., 5.)]);
        Ok(())
    }

    #[test]
    fn whitespace_and_float_syntax() -> Result<()> {
        let records = read(" 1.5 , -2e3\r\n0,  .25\t\n")?;
        assert_eq!(records, vec![Record::new(1.5, -2000.),
                                 Record::new(0., 0.25)]);
        Ok(())
    }

    #[test]
    fn malformed_line_aborts_the_read() {
        match read("1,2\nabc\n3,4\n") {
            Err(PlotError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn empty_line_is_malformed() {
        assert!(matches!(read("1,2\n\n3,4\n"),
                         Err(PlotError::Parse { line: 2, .. })));
    }

    #[test]
    fn missing_second_field() {
        let err = Record::parse("42", 7).unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 7, .. }));
        assert!(err.to_string().contains("missing second field"));
    }

    #[test]
    fn non_numeric_second_field() {
        assert!(matches!(Record::parse("1,x", 1),
                         Err(PlotError::Parse { line: 1, .. })));
    }
}
