use crate::lie::BCH_api::BCH;
use nalgebra::DMatrix;

pub fn bch_examples(example: usize) {
    match example {
        0 => {
            // COMMUTING MATRICES
            // diagonal matrices commute, every bracket vanishes and Z is just X + Y
            let x = DMatrix::from_diagonal_element(3, 3, 1.5);
            let y = DMatrix::from_diagonal_element(3, 3, -0.5);
            let mut bch = BCH::new();
            bch.set_solver_params(Some("off".to_string()), false);
            bch.set_matrices(x, y).unwrap();
            let z = bch.solve().unwrap();
            println!("Z = {}", z);
        }
        1 => {
            // SL(2) GENERATORS
            // the standard raising/lowering pair, expanded up to the default 5th order
            let x = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]);
            let y = DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, 0.0]);
            let mut bch = BCH::new();
            bch.set_solver_params(Some("off".to_string()), false);
            bch.set_matrices(x, y).unwrap();
            let z = bch.solve().unwrap();
            println!("Z = {}", z);
            println!("pairs generated: {:?}", bch.pairs);
        }
        2 => {
            // TRUNCATION ORDER
            // same generators at order 2: Z = X + Y + [X,Y]/2 exactly
            let x = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]);
            let y = DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, 0.0]);
            let mut bch = BCH::new();
            bch.set_solver_params(Some("off".to_string()), false);
            bch.set_order(2);
            bch.set_matrices(x, y).unwrap();
            let z = bch.solve().unwrap();
            println!("Z = {}", z);
        }
        _ => {
            println!("example not found");
        }
    }
}
