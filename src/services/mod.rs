pub mod backend_client;
pub mod report_builder;
pub mod text_renderer;

pub use backend_client::{CalculationClient, ClientError};
pub use report_builder::build_report;
pub use text_renderer::{render_error, render_text};
