// crates/agriverse-cli/src/commands/mod.rs
//
// Command module declarations for the Agriverse CLI.

pub mod carbon;
pub mod stake;

use agriverse_carbon::RenewablePolicy;

use crate::output::OutputFormat;

/// Settings resolved from the config file and global flags.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub output: OutputFormat,
    pub renewable_policy: RenewablePolicy,
}
