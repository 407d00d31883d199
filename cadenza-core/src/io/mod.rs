// Cadenza
// Copyright (c) 2026 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `io` module implements bit-level I/O over caller-owned byte buffers.
//!
//! All positions are carried by a [`BitCursor`], a plain value the caller persists between calls.
//! A [`BitReader`] or [`BitWriter`] is a short-lived view binding a cursor to one buffer; the
//! cursor outlives the view, so a bitstream may continue across any number of calls.

mod bit;

pub use bit::{BitCursor, BitReader, BitWriter};
