/// Building: one rooftop in the row.
///
/// A building has no stored index: its position IS its index in the row,
/// and positions are passed explicitly wherever needed.

#[derive(Clone, Debug)]
pub struct Building {
    /// Current rooftop level. Drifts every turn.
    pub height: u32,
    /// Height before the last mutation pass. Kept for display/diagnostics.
    pub previous_height: u32,
    /// Exactly one building in the row carries the portal. Set at load,
    /// never reassigned.
    pub has_exit_portal: bool,
    pub has_fuel_cell: bool,
    pub has_web: bool,
    pub is_frozen: bool,
}

impl Building {
    pub fn new(
        height: u32,
        has_exit_portal: bool,
        has_fuel_cell: bool,
        has_web: bool,
        is_frozen: bool,
    ) -> Self {
        Building {
            height,
            previous_height: height,
            has_exit_portal,
            has_fuel_cell,
            has_web,
            is_frozen,
        }
    }

    /// Plain rooftop with the given height and no occupants.
    #[allow(dead_code)]
    pub fn bare(height: u32) -> Self {
        Building::new(height, false, false, false, false)
    }
}
