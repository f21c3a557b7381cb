pub mod layer_panel;
pub mod selection;
