mod root;
mod screens;
mod state;

pub use root::App;
#[allow(unused_imports)]
pub(crate) use root::Services;
