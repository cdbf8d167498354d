// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This software may be used and distributed according to the terms of the
// GNU General Public License version 2.

//! Probe values and the layout helpers used to compute them.
//!
//! A probe pairs the C expression it describes with the value the build
//! platform gives it. Sizes come from `size_of`, constants from the `libc`
//! crate or the generated kernel bindings, and offsets from the address of a
//! field within an uninitialized instance of its structure.

use num::traits::AsPrimitive;
use std::fmt;

/// Byte offset of a field, nested field, union member or array element
/// within `$ty`.
///
/// Works on an uninitialized instance and only forms raw pointers, so it
/// also covers union members and indexed array elements which
/// `core::mem::offset_of!` cannot express.
///
/// ```
/// # use abiprobe::field_offset;
/// assert_eq!(field_offset!(libc::timespec, tv_sec), 0);
/// ```
#[macro_export]
macro_rules! field_offset {
    ($ty:ty, $($field:tt)+) => {{
        let slot = ::core::mem::MaybeUninit::<$ty>::uninit();
        let base = slot.as_ptr();
        #[allow(unused_unsafe)]
        let field = unsafe { ::core::ptr::addr_of!((*base).$($field)+) };
        (field as *const u8 as usize) - (base as *const u8 as usize)
    }};
}

/// Size in bytes of a field, nested field or union member of `$ty`.
#[macro_export]
macro_rules! field_size {
    ($ty:ty, $($field:tt)+) => {{
        let slot = ::core::mem::MaybeUninit::<$ty>::uninit();
        let base = slot.as_ptr();
        #[allow(unused_unsafe)]
        let field = unsafe { ::core::ptr::addr_of!((*base).$($field)+) };
        $crate::probe::size_of_pointee(field)
    }};
}

#[doc(hidden)]
pub const fn size_of_pointee<T>(_: *const T) -> usize {
    std::mem::size_of::<T>()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeValue {
    /// `size_of` a type or a field.
    Size(usize),
    /// Decimal integer constant.
    Int(i64),
    /// Flag, mask or constant shown as 8 hex digits.
    Hex32(u32),
    /// `long` value shown as 16 hex digits.
    Hex64(u64),
    /// Byte offset of a field from the start of its structure.
    Offset(usize),
}

impl ProbeValue {
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeValue::Size(_) => "size",
            ProbeValue::Int(_) => "int",
            ProbeValue::Hex32(_) => "hex32",
            ProbeValue::Hex64(_) => "hex64",
            ProbeValue::Offset(_) => "offset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// The C expression this probe describes, e.g. `struct stat`.
    pub label: &'static str,
    pub value: ProbeValue,
}

impl Probe {
    pub fn size_of<T>(label: &'static str) -> Self {
        Self::size(label, std::mem::size_of::<T>())
    }

    pub fn size(label: &'static str, size: usize) -> Self {
        Self {
            label,
            value: ProbeValue::Size(size),
        }
    }

    pub fn int<T: AsPrimitive<i64>>(label: &'static str, value: T) -> Self {
        Self {
            label,
            value: ProbeValue::Int(value.as_()),
        }
    }

    /// Narrower signed values are sign extended and wider ones truncated,
    /// the same bits `printf("%08x")` shows for them.
    pub fn hex32<T: AsPrimitive<u32>>(label: &'static str, value: T) -> Self {
        Self {
            label,
            value: ProbeValue::Hex32(value.as_()),
        }
    }

    pub fn hex64<T: AsPrimitive<u64>>(label: &'static str, value: T) -> Self {
        Self {
            label,
            value: ProbeValue::Hex64(value.as_()),
        }
    }

    pub fn offset(label: &'static str, offset: usize) -> Self {
        Self {
            label,
            value: ProbeValue::Offset(offset),
        }
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            ProbeValue::Size(v) => write!(f, "sizeof {} = {}", self.label, v),
            ProbeValue::Int(v) => write!(f, "{} = {}", self.label, v),
            ProbeValue::Hex32(v) => write!(f, "{} = 0x{:08x}", self.label, v),
            ProbeValue::Hex64(v) => write!(f, "{} = 0x{:016x}", self.label, v),
            ProbeValue::Offset(v) => write!(f, "{} = {}", self.label, v),
        }
    }
}

/// One line of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// Section boundary, always starts with `---`.
    Marker(&'static str),
    Probe(Probe),
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Marker(m) => f.write_str(m),
            Entry::Probe(p) => p.fmt(f),
        }
    }
}
