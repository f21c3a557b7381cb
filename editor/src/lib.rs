// `macro_rules!` macros need to be declared before the modules that use them
#[macro_use]
mod macros;

pub mod application;
pub mod consts;
pub mod dispatcher;
pub mod messages;
pub mod misc;
#[cfg(test)]
pub mod test_utils;
pub mod utility_traits;

pub use application::Editor;
pub use misc::EditorError;
