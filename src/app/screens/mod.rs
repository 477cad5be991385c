mod connect;
mod dashboard;
mod history;
mod login;
mod profile;
mod signup;
mod subscribe;

pub use connect::ConnectScreen;
pub use dashboard::DashboardScreen;
pub use history::HistoryScreen;
pub use login::LoginScreen;
pub use profile::ProfileScreen;
pub use signup::SignupScreen;
pub use subscribe::SubscribeScreen;
