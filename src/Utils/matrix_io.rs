use crate::lie::errors::BCHError;
use csv::Writer;
use itertools::Itertools;
use nalgebra::DMatrix;
use nom::{
    IResult, Parser,
    character::complete::{space0, space1},
    multi::separated_list1,
    number::complete::double,
    sequence::delimited,
};
use std::fs;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// one matrix row: floats separated by spaces, optional padding around
fn parse_row(input: &str) -> IResult<&str, Vec<f64>> {
    delimited(space0, separated_list1(space1, double), space0).parse(input)
}

/// Parses a whitespace/newline-delimited matrix: one row per line, each
/// element separated by a space, i.e.
/// ```text
/// 1 2 1
/// 3 5 6
/// -4 2 6
/// ```
/// Blank lines are skipped; ragged rows are rejected.
pub fn parse_matrix(input: &str) -> Result<DMatrix<f64>, String> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (line_number, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_row(line) {
            Ok((rest, row)) if rest.is_empty() => rows.push(row),
            Ok((rest, _)) => {
                return Err(format!(
                    "unexpected token '{}' in line {}",
                    rest,
                    line_number + 1
                ));
            }
            Err(e) => return Err(format!("line {}: {:?}", line_number + 1, e)),
        }
    }
    if rows.is_empty() {
        return Err("file contains no matrix rows".to_string());
    }
    let width = rows[0].len();
    for (row_number, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(format!(
                "matrix is not rectangular: row {} has {} elements, expected {}",
                row_number + 1,
                row.len(),
                width
            ));
        }
    }
    Ok(DMatrix::from_fn(rows.len(), width, |r, c| rows[r][c]))
}

/// Reads a matrix from a text file in the format of [`parse_matrix`].
/// Unreadable or malformed files fail with [`BCHError::InputMalformed`]
/// naming the file and the offending line.
pub fn read_matrix_from_file(path: &Path) -> Result<DMatrix<f64>, BCHError> {
    let content = fs::read_to_string(path).map_err(|e| BCHError::InputMalformed {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    parse_matrix(&content).map_err(|detail| BCHError::InputMalformed {
        path: path.display().to_string(),
        detail,
    })
}

pub fn save_matrix_to_file(matrix: &DMatrix<f64>, filename: &Path) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for row in matrix.row_iter() {
        writeln!(file, "{}", row.iter().map(|val| val.to_string()).join(" "))?;
    }
    Ok(())
}

pub fn save_matrix_to_csv(
    matrix: &DMatrix<f64>,
    filename: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);
    for row in matrix.row_iter() {
        writer.write_record(row.iter().map(|val| val.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
