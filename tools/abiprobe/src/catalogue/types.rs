// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

use crate::probe::Probe;
use libc::c_char;

pub(super) fn basic(out: &mut Vec<Probe>) {
    out.push(Probe::size_of::<*const c_char>("(char *)p"));
    out.push(Probe::size_of::<libc::c_int>("int"));
    out.push(Probe::size_of::<libc::c_long>("long"));
    out.push(Probe::size_of::<libc::c_longlong>("long long"));
    out.push(Probe::size_of::<libc::size_t>("size_t"));
    out.push(Probe::size_of::<libc::pid_t>("pid_t"));
}

pub(super) fn stat(out: &mut Vec<Probe>) {
    out.push(Probe::size_of::<libc::off_t>("off_t"));
    out.push(Probe::size_of::<libc::uid_t>("uid_t"));
    out.push(Probe::size_of::<libc::mode_t>("mode_t"));
    out.push(Probe::size_of::<libc::nlink_t>("nlink_t"));
    out.push(Probe::size_of::<libc::ino_t>("ino_t"));
    out.push(Probe::size_of::<libc::dev_t>("dev_t"));
    out.push(Probe::size_of::<libc::blksize_t>("blksize_t"));
    out.push(Probe::size_of::<libc::blkcnt_t>("blkcnt_t"));
    out.push(Probe::size_of::<libc::time_t>("time_t"));
    out.push(Probe::size_of::<libc::timespec>("struct timespec"));
    out.push(Probe::size_of::<libc::timeval>("struct timeval"));
    out.push(Probe::size_of::<libc::stat>("struct stat"));

    // file type bits of st_mode
    out.push(Probe::hex32("S_IFMT", libc::S_IFMT));
    out.push(Probe::hex32("S_IFSOCK", libc::S_IFSOCK));
    out.push(Probe::hex32("S_IFLNK", libc::S_IFLNK));
    out.push(Probe::hex32("S_IFREG", libc::S_IFREG));
    out.push(Probe::hex32("S_IFBLK", libc::S_IFBLK));
    out.push(Probe::hex32("S_IFDIR", libc::S_IFDIR));
    out.push(Probe::hex32("S_IFCHR", libc::S_IFCHR));
    out.push(Probe::hex32("S_IFIFO", libc::S_IFIFO));
}

pub(super) fn paths(out: &mut Vec<Probe>) {
    out.push(Probe::int("PATH_MAX", libc::PATH_MAX));
    out.push(Probe::size_of::<libc::dirent>("struct dirent"));
}
