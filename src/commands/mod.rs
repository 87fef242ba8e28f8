pub mod edit;
pub mod month;
pub mod new;
pub mod rm;
pub mod watch;
pub mod week;
