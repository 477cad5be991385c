mod backend;
mod remote;

pub use backend::Backend;
pub use remote::RemoteData;
