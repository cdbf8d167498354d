// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

//! The fixed, ordered catalogue of probes.
//!
//! Probes are grouped by subsystem. A group may open a new section of the
//! report, in which case its marker line is emitted before its probes. The
//! order of groups and of probes within a group is the report order.

mod dm;
mod fb;
mod fcntl;
mod loopdev;
mod netif;
mod socket;
mod termios;
mod types;

use crate::probe::Entry;
use crate::probe::Probe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Group {
    /// Pointer and integer widths.
    Basic,
    /// struct stat and its member types, file type bits.
    Stat,
    /// PATH_MAX and struct dirent.
    Paths,
    /// Terminal control.
    Termios,
    /// struct pollfd.
    Poll,
    /// open(2) and fcntl(2) flags.
    Fcntl,
    /// Device-mapper ioctls.
    Dm,
    /// Loop device ioctl structures.
    Loop,
    /// Socket addresses, families, types and options.
    Socket,
    /// struct pollfd as a long, poll events, FIONBIO and WNOHANG.
    Pollfd,
    /// Framebuffer ioctls and screen info layouts.
    Fb,
    /// Network interface ioctls and struct ifreq.
    Netif,
    /// clockid_t values.
    Clock,
}

struct GroupDef {
    group: Group,
    marker: Option<&'static str>,
    probes: fn(&mut Vec<Probe>),
}

const GROUPS: &[GroupDef] = &[
    GroupDef {
        group: Group::Basic,
        marker: Some("---"),
        probes: types::basic,
    },
    GroupDef {
        group: Group::Stat,
        marker: None,
        probes: types::stat,
    },
    GroupDef {
        group: Group::Paths,
        marker: None,
        probes: types::paths,
    },
    GroupDef {
        group: Group::Termios,
        marker: None,
        probes: termios::termios,
    },
    GroupDef {
        group: Group::Poll,
        marker: None,
        probes: termios::poll,
    },
    GroupDef {
        group: Group::Fcntl,
        marker: None,
        probes: fcntl::fcntl,
    },
    GroupDef {
        group: Group::Dm,
        marker: Some("---dm-ioctl"),
        probes: dm::dm,
    },
    GroupDef {
        group: Group::Loop,
        marker: Some("---linux/loop.h"),
        probes: loopdev::loop_info,
    },
    GroupDef {
        group: Group::Socket,
        marker: None,
        probes: socket::socket,
    },
    GroupDef {
        group: Group::Pollfd,
        marker: None,
        probes: socket::pollfd,
    },
    GroupDef {
        group: Group::Fb,
        marker: None,
        probes: fb::fb,
    },
    GroupDef {
        group: Group::Netif,
        marker: None,
        probes: netif::netif,
    },
    GroupDef {
        group: Group::Clock,
        marker: None,
        probes: netif::clock,
    },
];

impl Group {
    pub fn all() -> impl Iterator<Item = Group> {
        GROUPS.iter().map(|def| def.group)
    }

    /// Probes of this group alone, without any marker.
    pub fn probes(self) -> Vec<Probe> {
        let mut probes = vec![];
        for def in GROUPS.iter().filter(|def| def.group == self) {
            (def.probes)(&mut probes);
        }
        probes
    }
}

/// The full report in catalogue order.
pub fn collect() -> Vec<Entry> {
    collect_groups(&Group::all().collect::<Vec<_>>())
}

/// The report restricted to `selected` groups, still in catalogue order.
///
/// A marker is emitted only if at least one selected group follows it
/// before the next marker.
pub fn collect_groups(selected: &[Group]) -> Vec<Entry> {
    let mut entries = vec![];
    let mut pending = None;

    for def in GROUPS {
        if def.marker.is_some() {
            pending = def.marker;
        }
        if !selected.contains(&def.group) {
            continue;
        }
        if let Some(marker) = pending.take() {
            entries.push(Entry::Marker(marker));
        }

        let mut probes = vec![];
        (def.probes)(&mut probes);
        entries.extend(probes.into_iter().map(Entry::Probe));
    }

    entries
}
