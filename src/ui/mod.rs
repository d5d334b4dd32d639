/// UI layer: pure presentation over [`crate::state::AppState`].
pub mod charts;
pub mod panels;
