use imbalance_quantities::{
    cost::{Cost, KiloCost},
    energy::MegawattHours,
    power::Megawatts,
    price::KilowattHourPrice,
    share::Share,
    time::Hours,
};

/// Generator parameters of a single calculation.
///
/// Nothing is validated: negative power or a share outside `0.0..=1.0` simply propagate.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CalculationInput {
    pub power: Megawatts,

    /// Price of a kilowatt-hour.
    pub price: KilowattHourPrice,

    /// Share of the energy which is not subject to the imbalance penalty.
    pub penalty_free_share: Share,
}

/// Financial outcome of a day of generation, everything in thousands of currency units.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CalculationResult {
    pub revenue: KiloCost,
    pub penalty: KiloCost,

    /// Revenue minus penalty.
    pub profit: KiloCost,
}

impl CalculationInput {
    pub fn compute(self) -> CalculationResult {
        let total_energy: MegawattHours = self.power * Hours::ONE_DAY;
        let revenue: Cost = total_energy * self.penalty_free_share * self.price;
        let penalty: Cost = total_energy * self.penalty_free_share.complement() * self.price;
        CalculationResult {
            revenue: revenue.into(),
            penalty: penalty.into(),
            profit: (revenue - penalty).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn compute(power: f64, price: f64, penalty_free_share: f64) -> CalculationResult {
        CalculationInput {
            power: Megawatts(power),
            price: KilowattHourPrice(price),
            penalty_free_share: Share(penalty_free_share),
        }
        .compute()
    }

    #[test]
    fn test_reference_example() {
        let result = compute(10.0, 2.0, 0.8);
        assert_abs_diff_eq!(result.revenue.0, 384.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.penalty.0, 96.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.profit.0, 288.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_share() {
        let result = compute(5.0, 3.0, 0.0);
        assert_abs_diff_eq!(result.revenue.0, 0.0);
        assert_abs_diff_eq!(result.penalty.0, 5.0 * 24.0 * 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.profit.0, -result.penalty.0, epsilon = 1e-9);
    }

    #[test]
    fn test_full_share() {
        let result = compute(5.0, 3.0, 1.0);
        assert_abs_diff_eq!(result.penalty.0, 0.0);
        assert_abs_diff_eq!(result.profit.0, result.revenue.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_profit() {
        let result = compute(10.0, 2.0, 0.5);
        assert_abs_diff_eq!(result.revenue.0, result.penalty.0);
        assert_eq!(result.profit, KiloCost::ZERO);
    }

    #[test]
    fn test_profit_is_revenue_minus_penalty() {
        for (power, price, share) in [
            (10.0, 2.0, 0.8),
            (0.5, 4.25, 0.13),
            (-3.0, 1.5, 0.7),
            (250.0, 0.01, 1.7),
            (1e6, 7.3, -0.2),
        ] {
            let result = compute(power, price, share);
            assert_abs_diff_eq!(
                result.profit.0,
                result.revenue.0 - result.penalty.0,
                epsilon = 1e-9 * result.revenue.0.abs().max(1.0),
            );
        }
    }

    /// Keeps the exact evaluation order of the reference formula.
    #[test]
    fn test_bitwise_formula() {
        let (power, price, share) = (0.3, 0.7, 0.1);
        let total_energy = power * 24.0;
        let revenue = total_energy * share * price * 1000.0;
        let penalty = total_energy * (1.0 - share) * price * 1000.0;

        let result = compute(power, price, share);
        assert_eq!(result.revenue.0.to_bits(), (revenue / 1000.0).to_bits());
        assert_eq!(result.penalty.0.to_bits(), (penalty / 1000.0).to_bits());
        assert_eq!(result.profit.0.to_bits(), ((revenue - penalty) / 1000.0).to_bits());
    }

    #[test]
    fn test_nan_propagates() {
        let result = compute(f64::NAN, 2.0, 0.5);
        assert!(result.revenue.0.is_nan());
        assert!(result.penalty.0.is_nan());
        assert!(result.profit.0.is_nan());
    }

    #[test]
    fn test_idempotence() {
        assert_eq!(compute(12.5, 1.75, 0.66), compute(12.5, 1.75, 0.66));
    }
}
