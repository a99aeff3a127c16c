use std::ops::Mul;

use crate::{cost::Cost, price::KilowattHourPrice, share::Share};

const KILOWATT_HOURS_PER_MEGAWATT_HOUR: f64 = 1000.0;

quantity!(MegawattHours, suffix: "MWh");

impl Mul<Share> for MegawattHours {
    type Output = Self;

    fn mul(self, share: Share) -> Self::Output {
        Self(self.0 * share.0)
    }
}

impl Mul<KilowattHourPrice> for MegawattHours {
    type Output = Cost;

    fn mul(self, price: KilowattHourPrice) -> Self::Output {
        // The kilowatt-hour factor stays last, the order is `energy * price * 1000`.
        Cost(self.0 * price.0 * KILOWATT_HOURS_PER_MEGAWATT_HOUR)
    }
}
