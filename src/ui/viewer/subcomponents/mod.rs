// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, and a handle() method
//! returning a local Effect. The main component.rs orchestrates these
//! sub-components and turns their effects into viewer effects.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── overlay     - Chrome visibility and the hide timer
//!     ├── loading     - Display load tickets and host notification
//!     ├── navigation  - Index and boundary checks
//!     ├── fullscreen  - Platform fullscreen mirror
//!     ├── viewport    - Device profile and orientation debounce
//!     └── panels      - Info, like and mobile details toggles
//! ```

pub mod fullscreen;
pub mod loading;
pub mod navigation;
pub mod overlay;
pub mod panels;
pub mod viewport;
