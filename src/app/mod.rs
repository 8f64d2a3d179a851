pub mod batch;
pub mod shell;

pub use batch::{run_quote, BatchOutcome};
pub use shell::{Shell, ShellCommand};
