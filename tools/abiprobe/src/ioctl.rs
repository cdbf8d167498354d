// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

//! ioctl request codes that the kernel headers define through the
//! `_IO*()` macros, which bindgen cannot expand. They are encoded here with
//! the same direction/type/number/size layout for the target architecture.

use crate::kernel_intf::*;
use nix::request_code_read;
use nix::request_code_readwrite;
use std::mem::size_of;

pub type Request = nix::sys::ioctl::ioctl_num_type;

// <linux/dm-ioctl.h>: _IOWR(DM_IOCTL, DM_<cmd>_CMD, struct dm_ioctl)
const fn dm_iowr(cmd: u32) -> Request {
    request_code_readwrite!(DM_IOCTL, cmd, size_of::<dm_ioctl>())
}

pub const DM_VERSION: Request = dm_iowr(DM_VERSION_CMD as u32);
pub const DM_LIST_DEVICES: Request = dm_iowr(DM_LIST_DEVICES_CMD as u32);
pub const DM_DEV_CREATE: Request = dm_iowr(DM_DEV_CREATE_CMD as u32);
pub const DM_DEV_REMOVE: Request = dm_iowr(DM_DEV_REMOVE_CMD as u32);
pub const DM_DEV_SUSPEND: Request = dm_iowr(DM_DEV_SUSPEND_CMD as u32);
pub const DM_DEV_STATUS: Request = dm_iowr(DM_DEV_STATUS_CMD as u32);
pub const DM_TABLE_LOAD: Request = dm_iowr(DM_TABLE_LOAD_CMD as u32);
pub const DM_TABLE_STATUS: Request = dm_iowr(DM_TABLE_STATUS_CMD as u32);

// <linux/fs.h>: _IOR(0x12, 114, size_t)
pub const BLKGETSIZE64: Request = request_code_read!(0x12, 114, size_of::<libc::size_t>());
