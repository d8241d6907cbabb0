mod converter;
mod error;
mod output;
mod types;

pub use converter::Converter;
pub use output::write_log;
pub use types::OnFail;
