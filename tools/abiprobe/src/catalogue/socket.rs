// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

use crate::probe::Probe;
use std::ptr;

pub(super) fn socket(out: &mut Vec<Probe>) {
    out.push(Probe::size_of::<libc::sockaddr>("struct sockaddr"));
    out.push(Probe::size_of::<libc::sockaddr_un>("struct sockaddr_un"));
    out.push(Probe::size_of::<libc::sockaddr_storage>("struct sockaddr_storage"));

    out.push(Probe::hex32("AF_UNIX", libc::AF_UNIX));
    out.push(Probe::hex32("AF_LOCAL", libc::AF_LOCAL));
    out.push(Probe::hex32("AF_INET", libc::AF_INET));
    out.push(Probe::hex32("AF_INET6", libc::AF_INET6));
    out.push(Probe::hex32("SOCK_STREAM", libc::SOCK_STREAM));
    out.push(Probe::hex32("SOCK_DGRAM", libc::SOCK_DGRAM));
    out.push(Probe::hex32("SOCK_SEQPACKET", libc::SOCK_SEQPACKET));
    out.push(Probe::hex32("SOCK_NONBLOCK", libc::SOCK_NONBLOCK));
    out.push(Probe::hex32("SOCK_CLOEXEC", libc::SOCK_CLOEXEC));
    out.push(Probe::hex32("SOL_SOCKET", libc::SOL_SOCKET));
    out.push(Probe::hex32("SO_KEEPALIVE", libc::SO_KEEPALIVE));
    out.push(Probe::hex32("SO_REUSEADDR", libc::SO_REUSEADDR));
    out.push(Probe::hex32("MSG_DONTWAIT", libc::MSG_DONTWAIT));
}

/// The first `long` of a `struct pollfd { fd = 6, events = 2, revents = 3 }`.
///
/// Shows member order and byte order in one word, e.g. `0x0003000200000006`
/// on 64-bit little endian.
pub fn pollfd_word() -> libc::c_long {
    let pfd = libc::pollfd {
        fd: 6,
        events: 2,
        revents: 3,
    };
    const _: () =
        assert!(std::mem::size_of::<libc::c_long>() <= std::mem::size_of::<libc::pollfd>());
    // SAFETY: pfd is initialized and at least as large as a long.
    unsafe { ptr::read_unaligned(ptr::addr_of!(pfd).cast::<libc::c_long>()) }
}

pub(super) fn pollfd(out: &mut Vec<Probe>) {
    // zero extend like %lx on a 32-bit long
    out.push(Probe::hex64("pfdl", pollfd_word() as libc::c_ulong));

    out.push(Probe::hex32("POLLIN", libc::POLLIN));
    out.push(Probe::hex32("POLLOUT", libc::POLLOUT));
    out.push(Probe::hex32("POLLHUP", libc::POLLHUP));
    out.push(Probe::hex32("POLLRDHUP", libc::POLLRDHUP));
    out.push(Probe::hex32("POLLERR", libc::POLLERR));
    out.push(Probe::hex32("POLLNVAL", libc::POLLNVAL));

    out.push(Probe::hex32("FIONBIO", libc::FIONBIO));

    out.push(Probe::hex32("WNOHANG", libc::WNOHANG));
}
