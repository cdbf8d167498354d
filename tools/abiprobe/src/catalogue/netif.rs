// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

use crate::field_offset;
use crate::field_size;
use crate::probe::Probe;

// The C accessors ifr_addr, ifr_map and ifr_ifindex name members of the
// ifr_ifru union.
pub(super) fn netif(out: &mut Vec<Probe>) {
    out.push(Probe::int("IFNAMSIZ", libc::IFNAMSIZ));
    out.push(Probe::hex32("SIOCGIFADDR", libc::SIOCGIFADDR));
    out.push(Probe::hex32("SIOCSIFADDR", libc::SIOCSIFADDR));
    out.push(Probe::size_of::<libc::ifreq>("struct ifreq"));
    out.push(Probe::size(
        "ifr.ifr_addr",
        field_size!(libc::ifreq, ifr_ifru.ifru_addr),
    ));
    out.push(Probe::size(
        "ifr.ifr_map",
        field_size!(libc::ifreq, ifr_ifru.ifru_map),
    ));
    out.push(Probe::offset(
        "(char*)&ifr.ifr_ifindex - (char*)&ifr",
        field_offset!(libc::ifreq, ifr_ifru.ifru_ifindex),
    ));
}

pub(super) fn clock(out: &mut Vec<Probe>) {
    out.push(Probe::hex32("CLOCK_REALTIME", libc::CLOCK_REALTIME));
    out.push(Probe::hex32("CLOCK_MONOTONIC", libc::CLOCK_MONOTONIC));
    out.push(Probe::hex32("CLOCK_MONOTONIC_RAW", libc::CLOCK_MONOTONIC_RAW));
}
