//! Evaluation weights
//!
//! Every term of the heuristic is an integer tally per side multiplied by
//! one of these weights.

/// Weights for the position evaluation
pub struct EvalWeight;

impl EvalWeight {
    // Material
    /// Each piece on the board, man or king
    pub const PIECE: f64 = 1.0;
    /// Extra value of a king on top of `PIECE`
    pub const KING: f64 = 2.0;

    // Placement
    /// Per unit of the doubled centrality tally `10 - (|2r-9| + |2c-9|)`.
    /// Equals 0.15 per unit of half-width minus Manhattan distance.
    pub const CENTRALITY: f64 = 0.075;
    /// Per row a man has advanced from its own back row
    pub const ADVANCEMENT: f64 = 0.25;
    /// Man still guarding its own back row
    pub const BACK_ROW: f64 = 0.4;

    // King activity
    /// Flat bonus per king
    pub const KING_ACTIVE: f64 = 0.8;
    /// King standing on the opponent's half
    pub const KING_OPPONENT_HALF: f64 = 0.4;
    /// King inside the central 4x4 region
    pub const KING_CENTER: f64 = 0.3;

    // Mobility
    /// Per piece with at least one legal move
    pub const MOBILITY: f64 = 0.15;
    /// Per legal destination of a king
    pub const KING_MOBILITY: f64 = 0.1;
}

/// Central region rows/cols used by `KING_CENTER`
pub const CENTER_MIN: u8 = 3;
pub const CENTER_MAX: u8 = 6;
