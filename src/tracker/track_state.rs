/// Track state enumeration for the gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackState {
    /// Newly created track, not yet matched in a later frame
    #[default]
    Created,
    /// Matched in at least one later frame
    Tracked,
    /// Unmatched this frame; terminal, the track is discarded
    Removed,
}
