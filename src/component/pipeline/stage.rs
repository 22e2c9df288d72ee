use std::fmt;

/// `Init -> Extracting -> Shuffling -> {Cleanup | Preserve} -> Done`, with
/// `Failed` reachable from any non-terminal stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Init,
    Extracting,
    Shuffling,
    Cleanup,
    Preserve,
    Done,
    Failed,
}

impl PipelineStage {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    #[must_use]
    pub const fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Init, Self::Extracting)
                | (Self::Extracting, Self::Shuffling)
                | (Self::Shuffling, Self::Cleanup | Self::Preserve)
                | (Self::Cleanup | Self::Preserve, Self::Done)
                | (
                    Self::Init | Self::Extracting | Self::Shuffling | Self::Cleanup | Self::Preserve,
                    Self::Failed
                )
        )
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Extracting => "extracting",
            Self::Shuffling => "shuffling",
            Self::Cleanup => "cleanup",
            Self::Preserve => "preserve",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}
