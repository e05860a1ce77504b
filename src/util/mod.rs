//! Browser-side utilities.
//!
//! Everything here touches `web_sys` and is gated behind the `hydrate`
//! feature inside each function, with quiet fallbacks for server builds.
//! The pure rules these utilities act on live in `crate::state`.

pub mod load_guard;
pub mod observe;
pub mod scroll;
pub mod theme;
