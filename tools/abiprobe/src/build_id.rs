// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

use std::fmt::Write;

lazy_static::lazy_static! {
    static ref GIT_VERSION: String = {
        let mut ver = String::new();
        match option_env!("VERGEN_GIT_SHA") {
            Some(v) if v != "VERGEN_IDEMPOTENT_OUTPUT" => {
                ver += "g";
                ver += v;
                if let Some("true") = option_env!("VERGEN_GIT_DIRTY") {
                    ver += "-dirty";
                }
            }
            _ => {}
        }
        ver
    };
    /// Target triple the probed ABI belongs to.
    pub static ref TARGET_TRIPLE: &'static str = env!("VERGEN_CARGO_TARGET_TRIPLE");
}

pub fn full_version(semver: &str) -> String {
    let mut ver = semver.to_string();
    if !GIT_VERSION.is_empty() {
        let _ = write!(ver, "-{}", &*GIT_VERSION);
    }
    let _ = write!(ver, " {}", *TARGET_TRIPLE);
    if cfg!(debug_assertions) {
        ver += "/debug";
    }
    ver
}
