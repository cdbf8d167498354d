// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

//! # ABI probe for the build platform
//!
//! Reports sizes of types, layouts of structures and values of symbolic
//! constants as the platform the crate is compiled for defines them: the
//! `libc` crate for the C library ABI and bindgen output of the installed
//! kernel UAPI headers for device-mapper, loop devices and the framebuffer.
//!
//! Everything is resolved at compile time. A symbol the target lacks fails
//! the build instead of producing a fallback value.
//!
//! The report is a fixed sequence of [`Entry`] lines collected by
//! [`catalogue::collect`] and written by [`report::render_text`] or, as
//! structured records, [`report::render_json`].

pub mod probe;
pub use probe::Entry;
pub use probe::Probe;
pub use probe::ProbeValue;

pub mod build_id;
pub mod catalogue;
pub use catalogue::Group;
pub mod ioctl;
pub mod kernel_intf;
pub mod report;
