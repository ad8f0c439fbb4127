/// Deterministic frame budgeting for time-slicing render work.
///
/// Budgets are expressed in abstract row units rather than wall-clock
/// time. This keeps progressive rendering deterministic and replayable:
/// the same budget sequence always produces the same buffer states.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameBudget {
    remaining_rows: u32,
}

impl FrameBudget {
    pub fn new(rows: u32) -> Self {
        Self {
            remaining_rows: rows,
        }
    }

    /// A practically-unbounded budget (still deterministic).
    pub fn unlimited() -> Self {
        Self {
            remaining_rows: u32::MAX,
        }
    }

    pub fn remaining_rows(&self) -> u32 {
        self.remaining_rows
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_rows == 0
    }

    /// Attempts to consume `rows` from the budget.
    ///
    /// Returns `true` if the budget had enough remaining rows.
    pub fn try_consume(&mut self, rows: u32) -> bool {
        if self.remaining_rows < rows {
            return false;
        }
        self.remaining_rows -= rows;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::FrameBudget;

    #[test]
    fn consumes_rows() {
        let mut b = FrameBudget::new(3);
        assert!(b.try_consume(2));
        assert_eq!(b.remaining_rows(), 1);
        assert!(!b.try_consume(2));
        assert_eq!(b.remaining_rows(), 1);
        assert!(b.try_consume(1));
        assert!(b.is_exhausted());
    }
}
