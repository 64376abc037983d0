// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! - [`navigation`]: Boundary snapshot used to show or hide navigation controls

pub mod navigation;

pub use navigation::NavigationInfo;
