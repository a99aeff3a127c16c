use std::ops::Mul;

use crate::{energy::MegawattHours, time::Hours};

quantity!(Megawatts, suffix: "MW");

impl Mul<Hours> for Megawatts {
    type Output = MegawattHours;

    fn mul(self, hours: Hours) -> Self::Output {
        MegawattHours(self.0 * hours.0)
    }
}
