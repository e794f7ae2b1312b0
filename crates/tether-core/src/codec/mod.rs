pub mod branch;
pub mod hex;
pub mod optional;

pub use branch::branch_to_hex;
pub use self::hex::to_hex;
pub use optional::project;
