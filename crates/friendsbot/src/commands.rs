pub mod friends;
pub mod register;
