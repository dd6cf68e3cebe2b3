//! Viewports and camera poses

pub mod compute;
pub mod view;
pub mod view_state;

/// A lone view stands for a one-element view list.
impl From<view::View> for Vec<view::View> {
    fn from(view: view::View) -> Self {
        vec![view]
    }
}
