//! P. Hall basis machinery and the truncated Baker-Campbell-Hausdorff pipeline
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// static order metadata for basis element indices
pub mod hall_order;
/// enumeration of the ordered (k, j) pairs defining each basis element
pub mod hall_pairs;
/// precomputed per-pair weights of the truncated series
pub mod bch_coeff;
/// matrix commutator and evaluation of the basis element list
pub mod commutator;
/// final summation of the basis element list
pub mod accumulator;
/// error taxonomy of the pipeline: every error is terminal for the run
pub mod errors;
/// user-facing solver API
pub mod BCH_api;
