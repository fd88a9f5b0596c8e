pub mod common;
pub mod list;
pub mod objects;
pub mod pull;
pub mod push;

pub use common::CommandOptions;
pub use list::List;
pub use objects::Objects;
pub use pull::Pull;
pub use push::Push;
