/// The host application's lifecycle stage, ordered by how far the game has
/// progressed past startup. The upsert drain is gated on reaching a minimum
/// stage so that record application never races the host's construction of
/// its own baseline roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GameStage {
    Loading,
    MainMenu,
    SpaceCenter,
    Editor,
    TrackingStation,
    Flight,
}
