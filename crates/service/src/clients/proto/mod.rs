//! Vendored tonic-build output for `proto/book.proto`, checked in so builds
//! do not need protoc. Regenerate with tonic-build when the contract
//! changes.

pub mod book;
