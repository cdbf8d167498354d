// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

//! Rendering of collected entries.
//!
//! The text form is the canonical report, one entry per line. The JSON form
//! carries the same probes grouped under their section marker, with typed
//! values, for consumers that would otherwise have to parse the text.

use crate::probe::Entry;
use crate::probe::Probe;
use crate::probe::ProbeValue;
use serde::Serialize;
use std::io;
use std::io::Write;

pub fn render_text<W: Write>(entries: &[Entry], out: &mut W) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct Record {
    pub label: &'static str,
    pub kind: &'static str,
    pub value: serde_json::Number,
}

impl From<&Probe> for Record {
    fn from(probe: &Probe) -> Self {
        let value = match probe.value {
            ProbeValue::Size(v) | ProbeValue::Offset(v) => serde_json::Number::from(v),
            ProbeValue::Int(v) => serde_json::Number::from(v),
            ProbeValue::Hex32(v) => serde_json::Number::from(v),
            ProbeValue::Hex64(v) => serde_json::Number::from(v),
        };
        Self {
            label: probe.label,
            kind: probe.value.kind(),
            value,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Section {
    /// None only for probes that precede the first marker.
    pub marker: Option<&'static str>,
    pub probes: Vec<Record>,
}

pub fn sections(entries: &[Entry]) -> Vec<Section> {
    let mut sections: Vec<Section> = vec![];

    for entry in entries {
        match entry {
            Entry::Marker(m) => sections.push(Section {
                marker: Some(*m),
                probes: vec![],
            }),
            Entry::Probe(p) => {
                if sections.is_empty() {
                    sections.push(Section {
                        marker: None,
                        probes: vec![],
                    });
                }
                if let Some(section) = sections.last_mut() {
                    section.probes.push(p.into());
                }
            }
        }
    }

    sections
}

pub fn render_json<W: Write>(entries: &[Entry], out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &sections(entries))?;
    writeln!(out)
}
