quantity!(
    /// Money in base currency units.
    Cost, suffix: "¤"
);

quantity!(
    /// Money in thousands of currency units.
    KiloCost, suffix: "k¤"
);

impl From<Cost> for KiloCost {
    fn from(cost: Cost) -> Self {
        Self(cost.0 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_kilo_cost() {
        assert_abs_diff_eq!(KiloCost::from(Cost(384_000.0)).0, 384.0);
        assert_abs_diff_eq!(KiloCost::from(-Cost(96_000.0)).0, -96.0);
    }

    #[test]
    fn test_sum() {
        let total: Cost = [Cost(1.0), Cost(2.5), Cost(-0.5)].into_iter().sum();
        assert_abs_diff_eq!(total.0, 3.0);
    }
}
