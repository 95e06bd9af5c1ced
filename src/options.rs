//! Game configuration options.

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_debug(true)
///     .with_hit_soft_17(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Whether the deck logs its full contents when it is built.
    pub debug: bool,
    /// Whether the dealer hits on soft 17.
    pub hit_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            debug: false,
            hit_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets whether the deck listing is logged on construction.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_debug(true);
    /// assert!(options.debug);
    /// ```
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets whether the dealer hits on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_hit_soft_17(false);
    /// assert_eq!(options.hit_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_hit_soft_17(mut self, hit: bool) -> Self {
        self.hit_soft_17 = hit;
        self
    }
}
