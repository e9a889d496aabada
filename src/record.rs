use std::{ops::Range, path::Path};

use logos::Logos;
use miette::{Diagnostic, SourceSpan};

use crate::Error;

#[derive(Logos, Debug, PartialEq)]
enum Token {
    #[token(",")]
    Comma,
    #[regex(r"\r\n|\r|\n")]
    Newline,
    // Doubled quotes are an escaped quote
    #[regex(r#""([^"]|"")*""#)]
    Quoted,
    // A quote only opens a quoted field at its start
    #[regex(r#"[^,"\r\n][^,\r\n]*"#)]
    Bare,
}

/// One day of observations, temperatures in Fahrenheit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRecord {
    /// ISO-8601 date, kept as written in the input.
    pub date: String,
    pub temp_min_f: i64,
    pub temp_max_f: i64,
}

impl WeatherRecord {
    pub fn new(date: impl Into<String>, temp_min_f: i64, temp_max_f: i64) -> Self {
        Self {
            date: date.into(),
            temp_min_f,
            temp_max_f,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowErrorKind {
    #[error("missing header row")]
    MissingHeader,
    #[error("expected 3 fields (date,min,max), found {found}")]
    WrongArity { found: usize },
    #[error("{field} temperature `{value}` is not an integer")]
    BadTemperature { field: &'static str, value: String },
    #[error("unexpected character")]
    UnexpectedCharacter,
}

/// A data row that could not be turned into a [`WeatherRecord`].
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("malformed row on line {line}: {kind}")]
#[diagnostic(
    code(weather_report::malformed_row),
    help("rows must look like `2021-07-06,57,68`")
)]
pub struct RowError {
    pub line: usize,
    pub kind: RowErrorKind,
    #[source_code]
    src: String,
    #[label("here")]
    span: SourceSpan,
}

impl RowError {
    fn new(line: usize, kind: RowErrorKind, input: &str, span: Range<usize>) -> Self {
        Self {
            line,
            kind,
            src: input.to_string(),
            span: span.into(),
        }
    }
}

#[derive(Debug)]
struct Field {
    text: String,
    span: Range<usize>,
}

impl Field {
    fn empty(at: usize) -> Self {
        Self {
            text: String::new(),
            span: at..at,
        }
    }

    fn append(field: &mut Option<Self>, text: &str, span: Range<usize>) {
        let field = field.get_or_insert_with(|| Self::empty(span.start));
        field.text.push_str(text);
        field.span.end = span.end;
    }
}

#[derive(Debug)]
struct Row {
    line: usize,
    fields: Vec<Field>,
    span: Range<usize>,
}

impl Row {
    /// An empty line, or one holding nothing but whitespace. `,,` is not blank.
    fn is_blank(&self) -> bool {
        match self.fields.as_slice() {
            [] => true,
            [field] => field.text.trim().is_empty(),
            _ => false,
        }
    }
}

fn line_breaks(text: &str) -> usize {
    text.matches('\n').count() + text.matches('\r').count() - text.matches("\r\n").count()
}

/// Splits the input into rows of fields. Quoted fields may span lines.
fn split_rows(input: &str) -> Result<Vec<Row>, RowError> {
    let mut lexer = Token::lexer(input);
    let mut rows = Vec::new();

    let mut line = 1;
    let mut row_line = 1;
    let mut row_start = 0;
    let mut fields: Vec<Field> = Vec::new();
    let mut field: Option<Field> = None;

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(Token::Bare) => Field::append(&mut field, lexer.slice(), span),
            Ok(Token::Quoted) => {
                let slice = lexer.slice();
                line += line_breaks(slice);
                let text = slice[1..slice.len() - 1].replace("\"\"", "\"");
                Field::append(&mut field, &text, span);
            }
            Ok(Token::Comma) => {
                fields.push(field.take().unwrap_or_else(|| Field::empty(span.start)));
            }
            Ok(Token::Newline) => {
                if !fields.is_empty() || field.is_some() {
                    fields.push(field.take().unwrap_or_else(|| Field::empty(span.start)));
                }
                rows.push(Row {
                    line: row_line,
                    fields: std::mem::take(&mut fields),
                    span: row_start..span.start,
                });
                line += 1;
                row_line = line;
                row_start = span.end;
            }
            Err(()) => {
                return Err(RowError::new(
                    line,
                    RowErrorKind::UnexpectedCharacter,
                    input,
                    span,
                ))
            }
        }
    }

    // Last row without a trailing newline
    if !fields.is_empty() || field.is_some() {
        fields.push(field.take().unwrap_or_else(|| Field::empty(input.len())));
        rows.push(Row {
            line: row_line,
            fields,
            span: row_start..input.len(),
        });
    }

    Ok(rows)
}

fn temperature(
    field: &Field,
    name: &'static str,
    line: usize,
    input: &str,
) -> Result<i64, RowError> {
    field.text.trim().parse().map_err(|_| {
        RowError::new(
            line,
            RowErrorKind::BadTemperature {
                field: name,
                value: field.text.clone(),
            },
            input,
            field.span.clone(),
        )
    })
}

fn parse_row(row: Row, input: &str) -> Result<WeatherRecord, RowError> {
    let Row { line, fields, span } = row;
    let [date, min, max]: [Field; 3] = fields.try_into().map_err(|fields: Vec<Field>| {
        RowError::new(
            line,
            RowErrorKind::WrongArity {
                found: fields.len(),
            },
            input,
            span,
        )
    })?;

    Ok(WeatherRecord {
        temp_min_f: temperature(&min, "minimum", line, input)?,
        temp_max_f: temperature(&max, "maximum", line, input)?,
        date: date.text,
    })
}

/// Parses CSV text: one header row, then `date,min,max` rows in Fahrenheit.
///
/// Blank rows are skipped. The first malformed row aborts the whole load.
pub fn parse_records(input: &str) -> Result<Vec<WeatherRecord>, Error> {
    let mut rows = split_rows(input)?.into_iter();

    if rows.next().is_none() {
        return Err(RowError::new(1, RowErrorKind::MissingHeader, input, 0..0).into());
    }

    let mut records = Vec::new();
    for row in rows {
        if row.is_blank() {
            tracing::debug!(line = row.line, "skipping blank row");
            continue;
        }

        let record = parse_row(row, input)?;
        tracing::trace!(?record, "parsed record");
        records.push(record);
    }

    tracing::debug!(count = records.len(), "loaded weather records");
    Ok(records)
}

/// Reads a CSV file from disk, see [`parse_records`].
pub fn load_data_from_csv(path: impl AsRef<Path>) -> Result<Vec<WeatherRecord>, Error> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading weather records");

    let input = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&input)
}
