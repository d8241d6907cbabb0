mod render;
mod schema;

pub use render::{default_file_name, render_log, Airframe};
