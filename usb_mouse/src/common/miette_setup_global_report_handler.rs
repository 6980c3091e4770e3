// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Installs the graphical [miette](https://docs.rs/miette/latest/miette/index.html)
//! report handler that `read_mouse` uses when `main()` returns an error (fatal startup
//! errors like a bad file descriptor, or a failed interface claim).

use miette::MietteHandlerOpts;
use tracing::debug;

/// Footer printed under every error report.
pub const ISSUES_FOOTER: &str =
    "If the device was unplugged or is held by another process, re-open it and try again.";

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map(|(columns, _rows)| usize::from(columns))
                .unwrap_or(80);
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
