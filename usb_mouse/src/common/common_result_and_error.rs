// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// Every typed error in this crate ([`crate::StartupError`],
/// [`crate::TransportError`], [`crate::PollLoopError`], ...) derives
/// [`miette::Diagnostic`], so `?` converts it into a [`miette::Report`] that keeps
/// its diagnostic code and help text.
pub type CommonResult<T> = miette::Result<T>;
