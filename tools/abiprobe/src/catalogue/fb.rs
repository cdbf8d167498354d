// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

use crate::field_offset;
use crate::kernel_intf::*;
use crate::probe::Probe;

pub(super) fn fb(out: &mut Vec<Probe>) {
    out.push(Probe::hex32("FBIOGET_VSCREENINFO", FBIOGET_VSCREENINFO));
    out.push(Probe::hex32("FBIOGET_FSCREENINFO", FBIOGET_FSCREENINFO));
    out.push(Probe::hex32("FBIOGETCMAP", FBIOGETCMAP));
    out.push(Probe::hex32("FB_VISUAL_TRUECOLOR", FB_VISUAL_TRUECOLOR));
    out.push(Probe::hex32("FB_VISUAL_DIRECTCOLOR", FB_VISUAL_DIRECTCOLOR));
    out.push(Probe::hex32("FB_VISUAL_PSEUDOCOLOR", FB_VISUAL_PSEUDOCOLOR));
    out.push(Probe::hex32(
        "FB_VISUAL_STATIC_PSEUDOCOLOR",
        FB_VISUAL_STATIC_PSEUDOCOLOR,
    ));

    out.push(Probe::size_of::<fb_fix_screeninfo>("struct fb_fix_screeninfo"));
    out.push(Probe::size_of::<fb_var_screeninfo>("struct fb_var_screeninfo"));
    out.push(Probe::size_of::<fb_cmap>("struct fb_cmap"));
    out.push(Probe::size_of::<fb_bitfield>("struct fb_bitfield"));

    out.push(Probe::offset(
        "(char*)&vinfo.red - (char*)&vinfo",
        field_offset!(fb_var_screeninfo, red),
    ));
    out.push(Probe::offset(
        "(char*)&vinfo.red.length - (char*)&vinfo",
        field_offset!(fb_var_screeninfo, red.length),
    ));
    out.push(Probe::offset(
        "(char*)&vinfo.green.length - (char*)&vinfo",
        field_offset!(fb_var_screeninfo, green.length),
    ));
    out.push(Probe::offset(
        "(char*)&vinfo.blue.length - (char*)&vinfo",
        field_offset!(fb_var_screeninfo, blue.length),
    ));
    out.push(Probe::offset(
        "(char*)&finfo.smem_len - (char*)&finfo",
        field_offset!(fb_fix_screeninfo, smem_len),
    ));
    out.push(Probe::offset(
        "(char*)&finfo.line_length - (char*)&finfo",
        field_offset!(fb_fix_screeninfo, line_length),
    ));
}
