//! Pipeline-level tests driven by in-memory scenes.

mod fixtures;
mod pipeline_test;
