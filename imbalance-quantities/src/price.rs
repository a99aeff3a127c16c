quantity!(
    /// Price in currency units per kilowatt-hour.
    KilowattHourPrice, suffix: "/kWh"
);
