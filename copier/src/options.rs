use std::sync::OnceLock;

/// Nesting depth at which a copy gives up, unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs for a [`Copier`](crate::Copier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyOptions {
    init_all_embedded: bool,
    max_depth: usize,
}

impl CopyOptions {
    /// The default options: allocate only the embedded pointers the source
    /// populated, give up past [`DEFAULT_MAX_DEPTH`] nested copies.
    pub const fn new() -> Self {
        Self {
            init_all_embedded: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// When set, every null embedded pointer of a destination struct is
    /// allocated, whether or not the source has anything to put there.
    pub const fn init_all_embedded(mut self, init_all_embedded: bool) -> Self {
        self.init_all_embedded = init_all_embedded;
        self
    }

    /// How many nested copies may be stacked before the copy fails with
    /// [`CopyError::DepthLimitExceeded`](crate::CopyError::DepthLimitExceeded).
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether every null embedded pointer gets allocated.
    pub const fn initializes_all_embedded(&self) -> bool {
        self.init_all_embedded
    }

    /// The nesting limit.
    pub const fn depth_limit(&self) -> usize {
        self.max_depth
    }
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_OPTIONS: OnceLock<CopyOptions> = OnceLock::new();

/// Sets the options [`copy`](crate::copy) uses. Can only be done once per
/// process: later calls hand their options back.
pub fn set_global_options(options: CopyOptions) -> Result<(), CopyOptions> {
    GLOBAL_OPTIONS.set(options)
}

/// The options [`copy`](crate::copy) uses: whatever was passed to
/// [`set_global_options`], or the defaults.
pub fn global_options() -> CopyOptions {
    GLOBAL_OPTIONS.get().copied().unwrap_or_default()
}
