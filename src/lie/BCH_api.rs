///  Example#1
/// ```
/// use RustedBCH::lie::BCH_api::BCH;
/// use nalgebra::DMatrix;
/// // the standard sl(2) raising/lowering generators
/// let x = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]);
/// let y = DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, 0.0]);
/// let mut bch = BCH::new();
/// bch.set_matrices(x, y).unwrap();
/// let z = bch.solve().unwrap();
/// println!("Z = {}", z);
/// ```
/// Example#2
/// ```
/// // or read the matrices from whitespace-delimited text files
/// use RustedBCH::lie::BCH_api::BCH;
/// use std::io::Write;
/// let mut x_file = tempfile::NamedTempFile::new().unwrap();
/// let mut y_file = tempfile::NamedTempFile::new().unwrap();
/// writeln!(x_file, "0 1\n0 0").unwrap();
/// writeln!(y_file, "0 0\n1 0").unwrap();
/// let mut bch = BCH::new();
/// bch.set_solver_params(Some("off".to_string()), false);
/// bch.set_matrices_from_files(x_file.path(), y_file.path()).unwrap();
/// bch.solve().unwrap();
/// println!("Z = {}", bch.get_result().unwrap());
/// ```
use crate::Utils::matrix_io::read_matrix_from_file;
use crate::Utils::profiling::CustomTimer;
use crate::lie::accumulator::sum_elements;
use crate::lie::bch_coeff::get_coeff;
use crate::lie::commutator::evaluate_elements;
use crate::lie::errors::BCHError;
use crate::lie::hall_order::OrderTable;
use crate::lie::hall_pairs::generate_pairs;
use chrono::Local;
use log::{error, info};
use nalgebra::DMatrix;
use simplelog::*;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

/// Solver for Z = log(exp(X)exp(Y)) truncated in the P. Hall basis.
/// The pipeline is a single linear pass with no retries: order table ->
/// pair generation -> commutator evaluation -> summation.
pub struct BCH {
    pub x: DMatrix<f64>, // generator X, basis element index 1
    pub y: DMatrix<f64>, // generator Y, basis element index 2
    pub mat_size: usize, // side of the square matrices
    pub order: usize,    // expansion order of the truncated series
    pub coefficients: Vec<f64>, // per-pair weights, consumed in pair order
    pub pairs: Vec<(usize, usize)>, // pairs of the last run
    pub result: Option<DMatrix<f64>>, // Z of the last run

    pub loglevel: Option<String>,
    pub save_log: bool,
    pub custom_timer: CustomTimer,
    calc_statistics: HashMap<String, usize>,
}

impl BCH {
    pub fn new() -> BCH {
        BCH {
            x: DMatrix::zeros(0, 0),
            y: DMatrix::zeros(0, 0),
            mat_size: 0,
            order: 5,
            coefficients: get_coeff(),
            pairs: Vec::new(),
            result: None,
            loglevel: Some("info".to_string()),
            save_log: false,
            custom_timer: CustomTimer::new(),
            calc_statistics: HashMap::new(),
        }
    }
    ////////////////////////////SETTERS///////////////////////////////////////////////////////////////////
    /// Set the generator matrices. Both must be square and of the same
    /// dimensions; a mismatch fails here, before any pair is generated.
    pub fn set_matrices(&mut self, x: DMatrix<f64>, y: DMatrix<f64>) -> Result<(), BCHError> {
        if x.shape() != y.shape() || !x.is_square() {
            return Err(BCHError::DimensionMismatch {
                x_rows: x.nrows(),
                x_cols: x.ncols(),
                y_rows: y.nrows(),
                y_cols: y.ncols(),
            });
        }
        self.mat_size = x.nrows();
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Read both generator matrices from whitespace-delimited text files.
    pub fn set_matrices_from_files(
        &mut self,
        x_path: &Path,
        y_path: &Path,
    ) -> Result<(), BCHError> {
        self.custom_timer.io_tic();
        let x = read_matrix_from_file(x_path)?;
        let y = read_matrix_from_file(y_path)?;
        self.custom_timer.io_tac();
        self.set_matrices(x, y)
    }

    /// Expansion order of the truncated series. The shipped coefficient
    /// table covers the default order 5; higher orders need
    /// [`set_coefficients`](BCH::set_coefficients) with a longer sequence.
    pub fn set_order(&mut self, order: usize) {
        assert!(order >= 1, "Expansion order should be a positive number.");
        self.order = order;
    }

    /// Supply the per-pair weights from an external source. Only length
    /// sufficiency is validated, and only at evaluation time.
    pub fn set_coefficients(&mut self, coefficients: Vec<f64>) {
        self.coefficients = coefficients;
    }

    pub fn set_solver_params(&mut self, loglevel: Option<String>, save_log: bool) {
        self.loglevel = loglevel;
        self.save_log = save_log;
    }

    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
    //                                       main functions to start the solver and calculate statistics
    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

    /// the linear pipeline itself, no logging setup
    pub fn solver(&mut self) -> Result<DMatrix<f64>, BCHError> {
        assert!(
            self.mat_size > 0,
            "Matrices should be set before solving."
        );
        let table = OrderTable::new();

        self.custom_timer.pairs_tic();
        let pairs = generate_pairs(&table, self.order)?;
        self.custom_timer.pairs_tac();
        info!(
            "generated {} ordered pairs up to order {}",
            pairs.len(),
            self.order
        );

        self.custom_timer.commutators_tic();
        let elements = match evaluate_elements(&self.x, &self.y, &pairs, &self.coefficients) {
            Ok(elements) => elements,
            Err(e) => {
                error!("{}", e);
                return Err(e);
            }
        };
        self.custom_timer.commutators_tac();

        self.custom_timer.summation_tic();
        let z = sum_elements(&elements, (self.mat_size, self.mat_size))?;
        self.custom_timer.summation_tac();

        self.custom_timer.get_all();
        self.calc_statistics
            .insert("number of pairs".to_string(), pairs.len());
        self.calc_statistics
            .insert("number of basis elements".to_string(), elements.len());
        self.calc_statistics
            .insert("matrix size".to_string(), self.mat_size);
        self.calc_statistics
            .insert("expansion order".to_string(), self.order);
        self.pairs = pairs;
        self.result = Some(z.clone());
        self.calc_statistics();
        Ok(z)
    }

    // wrapper around solver function to implement logging
    pub fn solve(&mut self) -> Result<DMatrix<f64>, BCHError> {
        let is_logging_disabled = self
            .loglevel
            .as_ref()
            .map(|level| level == "off" || level == "none")
            .unwrap_or(false);

        if !is_logging_disabled {
            self.init_logger();
        }
        let res = self.solver();
        match &res {
            Ok(_) => info!("BCH solver completed successfully"),
            Err(e) => error!("BCH solver failed: {}", e),
        }
        res
    }

    pub fn get_result(&self) -> Option<DMatrix<f64>> {
        self.result.clone()
    }

    fn calc_statistics(&self) {
        let mut stats = self.calc_statistics.clone();
        let element_bytes =
            (2 + self.pairs.len()) * self.mat_size * self.mat_size * std::mem::size_of::<f64>();
        stats.insert("element storage, bytes".to_string(), element_bytes);
        let mut table = Builder::from(stats).build();
        table.with(Style::modern_rounded());
        info!("\n \n CALC STATISTICS \n \n {}", table.to_string());
    }

    ////////////////////////////////logging functions
    /// Initialize the logger based on current settings
    fn init_logger(&self) {
        let log_option = if let Some(level) = &self.loglevel {
            match level.as_str() {
                "debug" => LevelFilter::Debug,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                _ => panic!("loglevel must be debug, info, warn or error"),
            }
        } else {
            LevelFilter::Info
        };

        let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
        loggers.push(TermLogger::new(
            log_option,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
        if self.save_log {
            let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
            let name = format!("log_{}.txt", date_and_time);
            if let Ok(file) = File::create(name) {
                loggers.push(WriteLogger::new(log_option, Config::default(), file));
            }
        }
        let _ = CombinedLogger::init(loggers);
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                     TESTS
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn quiet() -> BCH {
        let mut bch = BCH::new();
        bch.set_solver_params(Some("off".to_string()), false);
        bch
    }

    #[test]
    fn test_BCH_zero_matrices_give_zero_result() {
        let mut bch = quiet();
        bch.set_matrices(DMatrix::zeros(2, 2), DMatrix::zeros(2, 2))
            .unwrap();
        let z = bch.solve().unwrap();
        assert_eq!(z, DMatrix::zeros(2, 2));
    }

    #[test]
    fn test_BCH_commuting_matrices_give_x_plus_y() {
        // diagonal matrices commute, so every bracket vanishes
        let x = DMatrix::from_diagonal_element(3, 3, 1.5);
        let y = DMatrix::from_diagonal_element(3, 3, -0.25);
        let mut bch = quiet();
        bch.set_matrices(x.clone(), y.clone()).unwrap();
        let z = bch.solve().unwrap();
        assert_relative_eq!(z, x + y, epsilon = 1e-12);
    }

    #[test]
    fn test_BCH_sl2_generators_at_order_two() {
        // X and Y are the sl(2) raising/lowering generators; up to the
        // 2nd order Z = X + Y + coeff[0]*comm(Y, X) = X + Y + [X,Y]/2
        let x = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]);
        let y = DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, 0.0]);
        let mut bch = quiet();
        bch.set_order(2);
        bch.set_matrices(x, y).unwrap();
        let z = bch.solve().unwrap();
        let expected = DMatrix::from_row_slice(2, 2, &[0.5, 1.0, 1.0, -0.5]);
        assert_relative_eq!(z, expected, epsilon = 1e-12);
        assert_eq!(bch.pairs, vec![(2, 1)]);
    }

    #[test]
    fn test_BCH_default_order_bookkeeping() {
        let x = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]);
        let y = DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, 0.0]);
        let mut bch = quiet();
        bch.set_matrices(x, y).unwrap();
        bch.solve().unwrap();
        // 12 pairs at the default 5th order, generators included in storage
        assert_eq!(bch.pairs.len(), 12);
        assert!(bch.get_result().is_some());
    }

    #[test]
    fn test_BCH_dimension_mismatch_fails_before_pair_generation() {
        let mut bch = quiet();
        let result = bch.set_matrices(DMatrix::zeros(2, 2), DMatrix::zeros(3, 3));
        assert_eq!(
            result,
            Err(BCHError::DimensionMismatch {
                x_rows: 2,
                x_cols: 2,
                y_rows: 3,
                y_cols: 3
            })
        );
        assert!(bch.pairs.is_empty());
    }

    #[test]
    fn test_BCH_non_square_matrices_are_rejected() {
        let mut bch = quiet();
        let result = bch.set_matrices(DMatrix::zeros(2, 3), DMatrix::zeros(2, 3));
        assert!(result.is_err());
    }

    #[test]
    fn test_BCH_short_coefficient_sequence_fails() {
        let x = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]);
        let y = DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, 0.0]);
        let mut bch = quiet();
        bch.set_order(3);
        bch.set_matrices(x, y).unwrap();
        bch.set_coefficients(vec![-0.5]);
        let result = bch.solve();
        assert_eq!(
            result,
            Err(BCHError::LengthMismatch {
                position: 1,
                pairs: 3,
                coefficients: 1
            })
        );
    }

    #[test]
    fn test_BCH_from_files_matches_in_memory_run() {
        let mut x_file = NamedTempFile::new().unwrap();
        let mut y_file = NamedTempFile::new().unwrap();
        writeln!(x_file, "0 1\n0 0").unwrap();
        writeln!(y_file, "0 0\n1 0").unwrap();

        let mut from_files = quiet();
        from_files
            .set_matrices_from_files(x_file.path(), y_file.path())
            .unwrap();
        let z_files = from_files.solve().unwrap();

        let mut in_memory = quiet();
        in_memory
            .set_matrices(
                DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]),
                DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, 0.0]),
            )
            .unwrap();
        let z_memory = in_memory.solve().unwrap();
        assert_relative_eq!(z_files, z_memory, epsilon = 1e-14);
    }
}
