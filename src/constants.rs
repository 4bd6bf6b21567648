/// Default half width of the narrow grid-fit window, in seconds
pub const NARROW_HALF_WINDOW_S: i64 = 100;

/// Default polynomial degree of the narrow grid-fit window
pub const NARROW_DEGREE: usize = 2;

/// Half width of the wide grid-fit window, in minutes
pub const WIDE_HALF_WINDOW_MIN: f64 = 30.0;

/// Number of samples of the wide grid-fit window
pub const WIDE_SAMPLES: usize = 1800;

/// Polynomial degree of the wide grid-fit window
pub const WIDE_DEGREE: usize = 3;

/// Spacing between the bracketed root anchors, in minutes
pub const ANCHOR_SPACING_MIN: f64 = 10.0;

/// Default number of grid points of the horizon crossing search
pub const HORIZON_GRID_POINTS: usize = 1800;

/// Search span of the horizon crossing search (either side of the anchor), in days
pub const HORIZON_SEARCH_SPAN_DAYS: f64 = 1.0;

/// Time zone of the default observatory
pub const T80S_TIMEZONE: &str = "America/Santiago";
