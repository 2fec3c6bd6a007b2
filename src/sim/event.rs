/// Events emitted while resolving a turn.
/// The presentation layer consumes these for narration.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TurnEvent {
    Jumped { from: usize, to: usize, cost: u32 },
    /// The device couldn't pay for the jump. Game over.
    InsufficientCharge { cost: u32 },
    /// Landed on the police web: 5 charge gone, web cleared.
    WebHit,
    /// Landed on a frozen building: 1 charge gone.
    /// The "skipping a turn" line this produces is cosmetic: the loop
    /// still prompts next turn.
    FrozenLanding,
    /// Landed on the exit portal while it wasn't frozen. Game won.
    PortalReached,
    FuelCellFound { recharged: u32 },
    /// Charge hit zero after landing effects. Game over.
    ChargeDepleted,
}
