// Cadenza
// Copyright (c) 2026 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]
// The following lints are allowed in all Cadenza crates. Please see the root Cargo.toml for their
// justification.
#![allow(clippy::comparison_chain)]
#![allow(clippy::identity_op)]
#![allow(clippy::manual_range_contains)]

//! An Adaptive Differential Pulse Code Modulation (ADPCM) audio codec.
//!
//! The codec compresses streams of signed 16-bit PCM samples into an adaptive delta-coded
//! bitstream and decompresses such bitstreams back into samples. A stream is a sequence of
//! frames: each frame opens with an uncompressed 16-bit predictor and 6-bit quantizer index,
//! followed by fixed-width delta codes that move the predictor by adaptively scaled steps.
//!
//! The codec owns no storage. The caller supplies the quantizer configuration once per stream as
//! a [`QuantizerProfile`], keeps all per-stream mutable state in a [`CodecState`] that is passed
//! into every call, and owns the sample and byte buffers. A call either processes the full
//! requested sample count and writes the updated state back, or fails without mutating anything,
//! so one stream may be processed across any number of calls with output identical to a single
//! call.
//!
//! Mono streams support both [`decode_mono`] and [`encode_mono`]. Stereo streams decode with
//! [`decode_stereo`]; stereo encoding is not part of the supported format surface and
//! [`encode_stereo`] always fails.

mod codec_mono;
mod codec_stereo;
mod common;

pub use codec_mono::{decode_mono, encode_mono};
pub use codec_stereo::{decode_stereo, encode_stereo};
pub use common::{ChannelState, CodecState, QuantizerProfile};
pub use common::{IMA_INDEX_TABLE, IMA_STEP_TABLE};
