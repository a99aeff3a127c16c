quantity!(Hours, suffix: "h");

impl Hours {
    /// Fixed generation horizon of a single day.
    pub const ONE_DAY: Self = Self(24.0);
}
