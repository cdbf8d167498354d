// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

use crate::field_size;
use crate::kernel_intf::loop_info64;
use crate::kernel_intf::LO_KEY_SIZE;
use crate::kernel_intf::LO_NAME_SIZE;
use crate::probe::Probe;

pub(super) fn loop_info(out: &mut Vec<Probe>) {
    out.push(Probe::size_of::<loop_info64>("struct loop_info64"));
    out.push(Probe::size("li.lo_device", field_size!(loop_info64, lo_device)));
    out.push(Probe::size("li.lo_inode", field_size!(loop_info64, lo_inode)));
    out.push(Probe::int("LO_NAME_SIZE", LO_NAME_SIZE));
    out.push(Probe::int("LO_KEY_SIZE", LO_KEY_SIZE));
}
