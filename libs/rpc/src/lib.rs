//! Protobuf messages and tonic client/server code for `user.UserService`.
//!
//! `src/generated` is produced from `proto/user/v1/user.proto` by the prost and
//! tonic codegen plugins and checked in.

mod generated;

pub use generated::user;
