// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console and machine-readable output for the CLI

pub mod formatter;
pub mod output;

pub use formatter::ListingFormatter;
pub use output::OutputFormat;
