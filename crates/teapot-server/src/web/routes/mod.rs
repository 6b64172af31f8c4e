//! Route handlers, one file per HTTP concept being demonstrated.

pub mod auth;
pub mod cookies;
pub mod hello;
pub mod note;
pub mod post;
pub mod redirects;
pub mod segments;
