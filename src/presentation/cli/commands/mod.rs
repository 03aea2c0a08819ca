pub mod init;
pub mod list;
pub mod open;

pub use init::*;
pub use list::*;
pub use open::*;
