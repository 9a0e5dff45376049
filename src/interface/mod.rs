pub mod prompts;
pub mod render;
pub mod replay;

pub use prompts::{prompt_yes_no, run_interactive};
pub use render::{display_session, format_table, render_session, write_csv};
pub use replay::{ReplayReport, load_script, replay};
