/// Saaty's Random Index: the expected consistency index of a randomly
/// generated reciprocal matrix, indexed by matrix dimension (index 0 is a
/// placeholder; a 0x0 matrix is rejected before any lookup).
///
/// RI is 0 for 1x1 and 2x2 matrices — at those sizes a reciprocal matrix
/// cannot be inconsistent, so the consistency ratio is 0 by convention.
pub const RANDOM_INDEX: [f64; 8] = [0.0, 0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32];

/// Largest matrix dimension with a tabulated Random Index entry.
pub const MAX_SUPPORTED_DIMENSION: usize = 7;

/// Conventional AHP acceptability threshold: a consistency ratio below
/// this means the judgments are coherent enough to trust the ranking.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;
