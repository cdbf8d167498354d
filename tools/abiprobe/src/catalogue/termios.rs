// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

use crate::field_offset;
use crate::field_size;
use crate::probe::Probe;

pub(super) fn termios(out: &mut Vec<Probe>) {
    out.push(Probe::size_of::<libc::termios>("struct termios"));

    // raw mode masks
    out.push(Probe::hex32(
        "~(BRKINT | ICRNL | INPCK | ISTRIP | IXON)",
        !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON),
    ));
    out.push(Probe::hex32("~(OPOST)", !libc::OPOST));
    out.push(Probe::hex32("CS8", libc::CS8));
    out.push(Probe::hex32(
        "~(ECHO | ICANON | IEXTEN | ISIG)",
        !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG),
    ));
    out.push(Probe::int("VMIN", libc::VMIN));
    out.push(Probe::int("VTIME", libc::VTIME));
    out.push(Probe::int("TCSAFLUSH", libc::TCSAFLUSH));

    out.push(Probe::offset(
        "(char*)&(tos.c_line) - (char*)&tos",
        field_offset!(libc::termios, c_line),
    ));
    out.push(Probe::offset(
        "(char*)&(tos.c_cc) - (char*)&tos",
        field_offset!(libc::termios, c_cc),
    ));
    out.push(Probe::offset(
        "(char*)&(tos.c_cc[VTIME]) - (char*)&tos",
        field_offset!(libc::termios, c_cc[libc::VTIME]),
    ));
    out.push(Probe::size("tos.c_cc", field_size!(libc::termios, c_cc)));

    out.push(Probe::hex32("TCGETS", libc::TCGETS));
    out.push(Probe::hex32("TCSETS", libc::TCSETS));
}

pub(super) fn poll(out: &mut Vec<Probe>) {
    out.push(Probe::size_of::<libc::pollfd>("struct pollfd"));
}
