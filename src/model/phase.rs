/// Cardiac phase whose overlay is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Ed,
    Es,
}

impl Phase {
    pub const ALL: [Phase; 2] = [Phase::Ed, Phase::Es];

    pub fn short_label(self) -> &'static str {
        match self {
            Phase::Ed => "ED",
            Phase::Es => "ES",
        }
    }

    pub fn overlay_title(self) -> &'static str {
        match self {
            Phase::Ed => "End-Diastole (ED) Overlay",
            Phase::Es => "End-Systole (ES) Overlay",
        }
    }
}
