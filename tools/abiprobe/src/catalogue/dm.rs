// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

use crate::field_offset;
use crate::field_size;
use crate::ioctl;
use crate::kernel_intf::dm_ioctl;
use crate::kernel_intf::dm_target_spec;
use crate::kernel_intf::DM_MAX_TYPE_NAME;
use crate::kernel_intf::DM_VERSION_MAJOR;
use crate::kernel_intf::DM_VERSION_MINOR;
use crate::probe::Probe;

pub(super) fn dm(out: &mut Vec<Probe>) {
    out.push(Probe::int("DM_VERSION_MAJOR", DM_VERSION_MAJOR));
    out.push(Probe::int("DM_VERSION_MINOR", DM_VERSION_MINOR));

    out.push(Probe::hex32("DM_VERSION", ioctl::DM_VERSION));
    out.push(Probe::hex32("DM_DEV_CREATE", ioctl::DM_DEV_CREATE));
    out.push(Probe::hex32("DM_DEV_SUSPEND", ioctl::DM_DEV_SUSPEND));
    out.push(Probe::hex32("DM_DEV_REMOVE", ioctl::DM_DEV_REMOVE));
    out.push(Probe::hex32("DM_DEV_STATUS", ioctl::DM_DEV_STATUS));
    out.push(Probe::hex32("DM_TABLE_LOAD", ioctl::DM_TABLE_LOAD));
    out.push(Probe::hex32("DM_TABLE_STATUS", ioctl::DM_TABLE_STATUS));
    out.push(Probe::hex32("DM_LIST_DEVICES", ioctl::DM_LIST_DEVICES));

    out.push(Probe::size_of::<dm_ioctl>("struct dm_ioctl"));
    out.push(Probe::size_of::<dm_target_spec>("struct dm_target_spec"));
    out.push(Probe::size("dmi.name", field_size!(dm_ioctl, name)));
    out.push(Probe::size("dmi.uuid", field_size!(dm_ioctl, uuid)));
    out.push(Probe::size_of::<dm_target_spec>("struct dm_target_spec"));

    out.push(Probe::hex32("BLKGETSIZE64", ioctl::BLKGETSIZE64));
    out.push(Probe::hex32("DM_MAX_TYPE_NAME", DM_MAX_TYPE_NAME));
    out.push(Probe::offset(
        "(char*)&(dmi.name) - (char*)&dmi",
        field_offset!(dm_ioctl, name),
    ));
}
