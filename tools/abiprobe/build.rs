// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

use std::env;
use std::path::PathBuf;
use vergen::EmitBuilder;

// Kernel UAPI headers whose types and constants end up in kernel_intf.rs.
const KERNEL_INTF_FILES: &str = r".*/linux/(dm-ioctl|loop|fb)\.h";

fn bindgen_kernel_intf(intf_h: &str, intf_rs: &str) {
    // Tell cargo to invalidate the built crate whenever the wrapper changes
    println!("cargo:rerun-if-changed={}", intf_h);
    println!("cargo:rerun-if-env-changed=ABIPROBE_CFLAGS");

    // Extra clang arguments, e.g. -I or --sysroot when the UAPI headers of
    // the target are not in the default search path.
    let cflags = env::var("ABIPROBE_CFLAGS").unwrap_or_default();

    let bindings = bindgen::Builder::default()
        .clang_args(cflags.split_whitespace())
        .header(intf_h)
        // Only what the probed headers declare, plus whatever they pull in.
        .allowlist_file(KERNEL_INTF_FILES)
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .generate()
        .expect("Unable to generate kernel UAPI bindings, are the linux headers installed?");

    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap());
    bindings
        .write_to_file(out_path.join(intf_rs))
        .expect("Couldn't write bindings!");
}

fn main() {
    bindgen_kernel_intf("src/kernel_intf.h", "kernel_intf.rs");
    EmitBuilder::builder()
        .all_git()
        .cargo_target_triple()
        .emit()
        .unwrap();
}
