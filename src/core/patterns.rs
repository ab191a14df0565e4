//=========================================================================
// Seed Patterns
//=========================================================================

/// A named set of alive cells used to seed a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

/// The five-cell glider the simulation starts from.
///
/// Travels one cell right and one cell down every four generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(5, 5), (6, 6), (6, 7), (7, 5), (7, 6)],
};
