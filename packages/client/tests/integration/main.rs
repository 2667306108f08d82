mod admin;
mod common;
mod status;
