//! different utility modules used throughout the project
/// tiny module to read matrices from whitespace-delimited text files and
/// to save the resulting matrix into txt/csv
pub mod matrix_io;
/// tiny module for profiling (might be useful for performance monitoring)
pub mod profiling;
