//! CLI for gurl: `gurl +<format> <url>`.

mod usage;

use anyhow::Result;
use clap::Parser;
use gurl_core::{render, DecomposedUrl, GurlError};
use std::ffi::OsString;
use std::io::{self, Write};

pub use usage::usage;

/// Top-level CLI for gurl.
///
/// Positionals are optional at the clap level so that missing arguments end
/// up as a `GurlError::Usage` with our own usage text and exit code. There
/// are no flags: `-h` or `--help` in the format slot fails the `+` check.
#[derive(Debug, Parser)]
#[command(name = "gurl", disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Print parts of a URL selected by a +format mask", long_about = None)]
#[command(override_usage = "gurl +<FORMAT> <URL>")]
pub struct Cli {
    /// Format mask prefixed with `+`, e.g. `+%s%S%H%p`.
    #[arg(value_name = "+FORMAT", allow_hyphen_values = true)]
    pub format: Option<String>,

    /// URL to take apart.
    #[arg(allow_hyphen_values = true)]
    pub url: Option<String>,

    /// Extra arguments are accepted and ignored.
    #[arg(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// A validated invocation: mask with the `+` stripped, and the raw URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub mask: String,
    pub url: String,
}

impl Cli {
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args)
    }

    pub fn into_invocation(self) -> Result<Invocation, GurlError> {
        let (Some(format), Some(url)) = (self.format, self.url) else {
            return Err(GurlError::Usage("expected +<format> and <url>".to_string()));
        };
        let Some(mask) = format.strip_prefix('+') else {
            return Err(GurlError::MissingPlusPrefix(format));
        };
        if !self.rest.is_empty() {
            tracing::debug!("ignoring extra arguments: {:?}", self.rest);
        }
        Ok(Invocation {
            mask: mask.to_string(),
            url,
        })
    }
}

/// Parse `args`, render, and write the result line to `out`.
pub fn run_from<I, T>(args: I, out: &mut impl Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_args(args) {
        Ok(cli) => cli,
        Err(err) => {
            tracing::debug!("clap rejected arguments: {}", err);
            return Err(GurlError::Usage(err.kind().to_string()).into());
        }
    };

    let invocation = cli.into_invocation()?;
    tracing::debug!("mask={:?} url={:?}", invocation.mask, invocation.url);

    let url = DecomposedUrl::parse(&invocation.url)?;
    let rendered = render(&invocation.mask, &url);
    writeln!(out, "{}", rendered)?;
    Ok(())
}

/// Print `err` to `w` in the shape the error calls for.
pub fn report(err: &anyhow::Error, w: &mut impl Write) -> io::Result<()> {
    match err.downcast_ref::<GurlError>() {
        Some(GurlError::Usage(reason)) => {
            tracing::debug!("usage error: {}", reason);
            write!(w, "{}", usage())
        }
        Some(GurlError::MissingPlusPrefix(_)) => {
            writeln!(w, "error: {}", err)?;
            write!(w, "{}", usage())
        }
        Some(GurlError::UrlParse { input, .. }) => {
            tracing::warn!("rejected url {:?}", input);
            writeln!(w, "{}", err)
        }
        _ => writeln!(w, "gurl error: {:#}", err),
    }
}

#[cfg(test)]
mod tests;
