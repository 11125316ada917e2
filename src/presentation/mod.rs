mod components;
mod view;

pub use view::{Screen, UiContext, draw};
