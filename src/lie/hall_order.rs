use crate::lie::errors::BCHError;

/// Indices at which a new bracket order begins: the known counts of Hall
/// basis elements accumulated up to successive orders, shifted by one.
/// The entry 2 bootstraps the table: it flags the generator Y so that
/// brackets with the first generator are admitted by the pair scan while
/// Y itself stays at order 1.
const FIRST_OF_ORDER: [usize; 10] = [2, 3, 4, 6, 9, 15, 24, 42, 72, 128];

/// The table is hand-derived and only valid up to this basis element index.
pub const MAX_INDEX: usize = 179;

/// Static metadata over basis element indices 1..=[`MAX_INDEX`]: which
/// bracket order each index belongs to and whether it opens a new order.
/// Lookups outside the valid range fail with [`BCHError::TableRange`]
/// instead of growing the table - the bound is a design limitation, not a
/// runtime-derived quantity.
pub struct OrderTable {
    is_first: Vec<bool>,
    order: Vec<usize>,
}

impl OrderTable {
    pub fn new() -> OrderTable {
        let mut is_first = vec![false; MAX_INDEX + 1];
        let mut order = vec![0usize; MAX_INDEX + 1];
        order[1] = 1;
        let mut j = 0;
        for i in 2..=MAX_INDEX {
            if FIRST_OF_ORDER.contains(&i) {
                is_first[i] = true;
                j += 1;
            }
            order[i] = j;
        }
        OrderTable { is_first, order }
    }

    /// bracket order (degree) of basis element index i
    pub fn order_of(&self, i: usize) -> Result<usize, BCHError> {
        self.check(i)?;
        Ok(self.order[i])
    }

    /// true exactly when index i begins a new bracket order
    pub fn is_first_of_order(&self, i: usize) -> Result<bool, BCHError> {
        self.check(i)?;
        Ok(self.is_first[i])
    }

    /// highest bracket order the table can describe
    pub fn max_order(&self) -> usize {
        self.order[MAX_INDEX]
    }

    fn check(&self, i: usize) -> Result<(), BCHError> {
        if i == 0 || i > MAX_INDEX {
            return Err(BCHError::TableRange {
                index: i,
                max: MAX_INDEX,
            });
        }
        Ok(())
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                     TESTS
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_of_known_values() {
        let table = OrderTable::new();
        assert_eq!(table.order_of(1).unwrap(), 1);
        assert_eq!(table.order_of(2).unwrap(), 1);
        assert_eq!(table.order_of(3).unwrap(), 2);
        assert_eq!(table.order_of(4).unwrap(), 3);
        assert_eq!(table.order_of(5).unwrap(), 3);
        assert_eq!(table.order_of(6).unwrap(), 4);
        assert_eq!(table.order_of(8).unwrap(), 4);
        assert_eq!(table.order_of(9).unwrap(), 5);
        assert_eq!(table.order_of(14).unwrap(), 5);
        assert_eq!(table.order_of(15).unwrap(), 6);
        assert_eq!(table.order_of(127).unwrap(), 9);
        assert_eq!(table.order_of(128).unwrap(), 10);
        assert_eq!(table.order_of(179).unwrap(), 10);
        assert_eq!(table.max_order(), 10);
    }

    #[test]
    fn test_order_is_non_decreasing() {
        let table = OrderTable::new();
        for i in 2..=MAX_INDEX {
            assert!(
                table.order_of(i).unwrap() >= table.order_of(i - 1).unwrap(),
                "order decreased at index {}",
                i
            );
        }
    }

    #[test]
    fn test_first_of_order_marks_order_increments() {
        let table = OrderTable::new();
        // index 2 is the bootstrap exception: flagged first-of-order while
        // staying at order 1, so the check starts at 3
        for i in 3..=MAX_INDEX {
            let increments = table.order_of(i).unwrap() != table.order_of(i - 1).unwrap();
            assert_eq!(
                table.is_first_of_order(i).unwrap(),
                increments,
                "first-of-order flag disagrees with order increment at index {}",
                i
            );
        }
        assert!(table.is_first_of_order(2).unwrap());
        assert_eq!(table.order_of(2).unwrap(), table.order_of(1).unwrap());
    }

    #[test]
    fn test_out_of_range_lookup_fails() {
        let table = OrderTable::new();
        assert_eq!(
            table.order_of(MAX_INDEX + 1),
            Err(BCHError::TableRange {
                index: MAX_INDEX + 1,
                max: MAX_INDEX
            })
        );
        assert!(table.order_of(0).is_err());
        assert!(table.is_first_of_order(1000).is_err());
    }
}
