// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`photo`]: Photo records and ordered sequences ([`PhotoRecord`](photo::PhotoRecord),
//!   [`PhotoSequence`](photo::PhotoSequence))
//! - [`ui`]: UI value objects ([`Scale`](ui::newtypes::Scale),
//!   [`RotationAngle`](ui::newtypes::RotationAngle), [`HideDelay`](ui::newtypes::HideDelay))

pub mod photo;
pub mod ui;
