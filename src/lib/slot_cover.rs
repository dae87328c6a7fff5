//! Picks a handful of weekly slots so that every student can make at least one of them.
pub mod availability_getter;
pub mod cover_reporter;
pub mod cover_search;
pub mod helpers;
pub mod models;
pub mod run_tool;
