//! Logic shared by the HTML and API data outputs.

pub mod inline_runs;
pub mod list_nesting;
