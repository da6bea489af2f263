// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for generated code and manual implementations.
//!
//! ```rust,ignore
//! use strongid_core::prelude::*;
//! ```

pub use crate::{IdValue, ModelConfig, ParseIdError, StrongId, ValueConverter, codec};
