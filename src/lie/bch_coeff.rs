/// Returns the ordered weights of the truncated series, one per pair
/// produced by [`generate_pairs`](crate::lie::hall_pairs::generate_pairs),
/// consumed in the same order the pairs are generated.
///
/// Each stored basis element is weight * comm of two already weighted
/// elements, so the weights below are the exact Hall-basis coefficients of
/// log(exp(X)exp(Y)) folded through that chained scaling:
///
/// index | pair   | bracket              | series coefficient
/// ------|--------|----------------------|-------------------
///   3   | (2,1)  | [Y,X]                | -1/2
///   4   | (3,1)  | [[Y,X],X]            |  1/12
///   5   | (3,2)  | [[Y,X],Y]            | -1/12
///   6   | (4,1)  | [[[Y,X],X],X]        |  0
///   7   | (4,2)  | [[[Y,X],X],Y]        |  1/24
///   8   | (5,2)  | [[[Y,X],Y],Y]        |  0
///   9   | (6,1)  | [[[[Y,X],X],X],X]    | -1/720
///  10   | (6,2)  | [[[[Y,X],X],X],Y]    | -1/180
///  11   | (7,2)  | [[[[Y,X],X],Y],Y]    |  1/180
///  12   | (8,2)  | [[[[Y,X],Y],Y],Y]    |  1/720
///  13   | (4,3)  | [[[Y,X],X],[Y,X]]    | -1/120
///  14   | (5,3)  | [[[Y,X],Y],[Y,X]]    | -1/360
///
/// Elements 6 and 8 carry series coefficient zero, so their stored
/// matrices vanish and the 5th-order elements 9, 10 and 12 built on top of
/// them are unreachable under chained scaling: the truncation is exact
/// through the 4th order and partial at the 5th. That loss is the known
/// accuracy ceiling of this expansion scheme.
pub fn get_coeff() -> Vec<f64> {
    vec![
        -1.0 / 2.0,  // (2,1)
        -1.0 / 6.0,  // (3,1)
        1.0 / 6.0,   // (3,2)
        0.0,         // (4,1)
        1.0 / 2.0,   // (4,2)
        0.0,         // (5,2)
        0.0,         // (6,1)  zero-weight parent
        0.0,         // (6,2)  zero-weight parent
        2.0 / 15.0,  // (7,2)
        0.0,         // (8,2)  zero-weight parent
        1.0 / 5.0,   // (4,3)
        -1.0 / 15.0, // (5,3)
    ]
}
