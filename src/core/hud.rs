//=========================================================================
// Header Display
//
// Formats the two counter lines drawn above the grid:
//
// ```text
//   row 0: Population: N
//   row 1: Generation: N
// ```
//
// Each line is padded to a fixed width so that writing a shorter number
// over a longer one blanks the leftover digits.
//
//=========================================================================

/// Minimum rendered width of a header line, in cells.
pub const HEADER_FIELD_WIDTH: usize = 32;

/// Header labels in row order.
pub const POPULATION_LABEL: &str = "Population";
pub const GENERATION_LABEL: &str = "Generation";

/// Formats `label: value`, right-padded with spaces to [`HEADER_FIELD_WIDTH`].
pub fn format_counter(label: &str, value: u64) -> String {
    format!("{:<width$}", format!("{}: {}", label, value), width = HEADER_FIELD_WIDTH)
}

/// Both header lines for the current counters.
pub fn header_lines(population: u64, generation: u64) -> [String; 2] {
    [
        format_counter(POPULATION_LABEL, population),
        format_counter(GENERATION_LABEL, generation),
    ]
}
