mod init;
mod list;
mod search;
mod seed;
mod verify;

pub use init::cmd_init;
pub use list::cmd_list;
pub use search::cmd_search;
pub use seed::cmd_seed;
pub use verify::cmd_verify;
