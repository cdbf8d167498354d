// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

use crate::probe::Probe;

pub(super) fn fcntl(out: &mut Vec<Probe>) {
    out.push(Probe::hex32("O_RDONLY", libc::O_RDONLY));
    out.push(Probe::hex32("O_WRONLY", libc::O_WRONLY));
    out.push(Probe::hex32("O_RDWR", libc::O_RDWR));
    out.push(Probe::hex32("O_CREAT", libc::O_CREAT));
    out.push(Probe::hex32("O_DIRECTORY", libc::O_DIRECTORY));
    out.push(Probe::hex32("O_TRUNC", libc::O_TRUNC));
    out.push(Probe::hex32("O_APPEND", libc::O_APPEND));
    out.push(Probe::hex32("O_CLOEXEC", libc::O_CLOEXEC));
    // __O_TMPFILE as spelled in asm-generic/fcntl.h, then with O_DIRECTORY
    // folded in as musl does.
    out.push(Probe::hex32("020000000", 0o20000000));
    out.push(Probe::hex32("020200000", 0o20200000));
    out.push(Probe::hex32("O_EXCL", libc::O_EXCL));
    out.push(Probe::hex32("O_NONBLOCK", libc::O_NONBLOCK));
    out.push(Probe::hex32("F_GETFD", libc::F_GETFD));
    out.push(Probe::hex32("F_SETFD", libc::F_SETFD));
    out.push(Probe::hex32("F_GETFL", libc::F_GETFL));
    out.push(Probe::hex32("F_SETFL", libc::F_SETFL));
}
