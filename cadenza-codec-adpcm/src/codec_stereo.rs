// Cadenza
// Copyright (c) 2026 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::debug;

use cadenza_core::errors::{decode_error, unsupported_error, Result};
use cadenza_core::io::BitReader;

use crate::common::{required_bits, CodecState, QuantizerProfile, MAX_STEP_INDEX};

/// Decodes `count` sample pairs of a stereo stream into the separate `left` and `right` buffers,
/// starting at the stream position carried by `state`.
///
/// Both channels share one bit cursor but adapt their predictor and quantizer index
/// independently. A frame header carries, in order, the left predictor, left index, right
/// predictor, and right index; in the body each sample pair is one left delta code followed by
/// one right delta code. As with mono decoding, all validation happens before any mutation.
pub fn decode_stereo(
    profile: &QuantizerProfile<'_>,
    state: &mut CodecState,
    encoded: &[u8],
    left: &mut [i16],
    right: &mut [i16],
    count: usize,
) -> Result<()> {
    for channel in &state.channels {
        if channel.step_index < 0 || channel.step_index > MAX_STEP_INDEX {
            return decode_error("adpcm: quantizer index out of range");
        }
    }

    let end = match state.sample_pos.checked_add(count) {
        Some(end) if end <= left.len() && end <= right.len() => end,
        _ => return decode_error("adpcm: sample buffers too short for requested count"),
    };

    let mut cursor = state.cursor;
    let mut channels = state.channels;

    let mut reader = BitReader::new(encoded, &mut cursor);

    if required_bits(profile, state.sample_pos, count, 2) > reader.bits_left() {
        return decode_error("adpcm: encoded buffer too short for requested count");
    }

    for offset in 0..count {
        let index = state.sample_pos + offset;
        let position = index + 1;

        if position & profile.frame_size_mask == 1 {
            // Channel headers are laid out left before right; each channel's predictor is its
            // first sample of the frame.
            for channel in channels.iter_mut() {
                channel.predicted = reader.read_bits_signed(16)? as i16;
                channel.step_index = reader.read_bits(6)? as i32;
            }
            left[index] = channels[0].predicted;
            right[index] = channels[1].predicted;
        }
        else {
            let delta = reader.read_bits(profile.bits_per_sample)?;
            left[index] = channels[0].expand_delta(delta, profile);

            let delta = reader.read_bits(profile.bits_per_sample)?;
            right[index] = channels[1].expand_delta(delta, profile);
        }
    }

    state.channels = channels;
    state.cursor = cursor;
    state.sample_pos = end;

    Ok(())
}

/// Stereo encoding is not part of the supported format surface.
///
/// The call fails deterministically and leaves the state and every caller-owned buffer
/// untouched. This is a documented limitation, not a transient error.
pub fn encode_stereo(
    _profile: &QuantizerProfile<'_>,
    _state: &mut CodecState,
    _left: &[i16],
    _right: &[i16],
    _encoded: &mut [u8],
    _count: usize,
) -> Result<()> {
    debug!("stereo adpcm encoding requested, but only stereo decoding is implemented");
    unsupported_error("adpcm: stereo encoding is not supported")
}
