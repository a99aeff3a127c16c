quantity!(
    /// Proportion of energy, intended to be within `0.0..=1.0`.
    ///
    /// Values outside the range are accepted as is.
    Share, suffix: "p.u."
);

impl Share {
    pub const WHOLE: Self = Self(1.0);

    /// The remaining proportion, `1 - self`.
    pub const fn complement(self) -> Self {
        Self(1.0 - self.0)
    }
}
