// Cadenza
// Copyright (c) 2026 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use cadenza_core::errors::{decode_error, Result};
use cadenza_core::io::{BitReader, BitWriter};

use crate::common::{required_bits, CodecState, QuantizerProfile, MAX_STEP_INDEX};

/// Picks a frame's starting quantizer index for the encoder: the lowest index whose step size
/// covers the jump from `previous` to `next`, or 63 when none does.
///
/// The scan is linear from the bottom of the table and returns the first match. Existing
/// bitstreams depend on this exact selection, including its behavior on tables that are not
/// monotonic, so it must not be replaced with a binary search.
fn index_for_delta(profile: &QuantizerProfile<'_>, previous: i16, next: i16) -> i32 {
    let diff = (i32::from(next) - i32::from(previous)).unsigned_abs();

    for index in 1..63 {
        if u32::from(profile.step_size_table[index - 1]) >= diff {
            return index as i32;
        }
    }
    63
}

/// Decodes `count` samples of a mono stream into `samples`, starting at the stream position
/// carried by `state`.
///
/// Samples at frame-header positions are read whole from the 16-bit predictor field; all others
/// are reconstructed from delta codes. The call validates the sample range and the exact bit cost
/// of the run before touching anything: it either decodes all `count` samples and writes the
/// updated state back, or fails with `state` and `samples` untouched.
pub fn decode_mono(
    profile: &QuantizerProfile<'_>,
    state: &mut CodecState,
    encoded: &[u8],
    samples: &mut [i16],
    count: usize,
) -> Result<()> {
    if state.channels[0].step_index < 0 || state.channels[0].step_index > MAX_STEP_INDEX {
        return decode_error("adpcm: quantizer index out of range");
    }

    let end = match state.sample_pos.checked_add(count) {
        Some(end) if end <= samples.len() => end,
        _ => return decode_error("adpcm: sample buffer too short for requested count"),
    };

    let mut cursor = state.cursor;
    let mut channel = state.channels[0];

    let mut reader = BitReader::new(encoded, &mut cursor);

    if required_bits(profile, state.sample_pos, count, 1) > reader.bits_left() {
        return decode_error("adpcm: encoded buffer too short for requested count");
    }

    for (offset, slot) in samples[state.sample_pos..end].iter_mut().enumerate() {
        let position = state.sample_pos + offset + 1;

        *slot = if position & profile.frame_size_mask == 1 {
            // Frame header: a raw two's complement predictor and the quantizer index the frame
            // starts from. The first sample of a frame is the predictor itself.
            channel.predicted = reader.read_bits_signed(16)? as i16;
            channel.step_index = reader.read_bits(6)? as i32;
            channel.predicted
        }
        else {
            let delta = reader.read_bits(profile.bits_per_sample)?;
            channel.expand_delta(delta, profile)
        };
    }

    state.channels[0] = channel;
    state.cursor = cursor;
    state.sample_pos = end;

    Ok(())
}

/// Encodes `count` samples of a mono stream from `samples` into `encoded`, starting at the
/// stream position carried by `state`.
///
/// Samples at frame-header positions are transmitted whole and re-seed the quantizer index from
/// the jump to the following sample when one exists in this run; all others are quantized into
/// delta codes. The trailing partial byte is flushed (padded, without consuming it) so the buffer
/// is valid after every call while further calls still continue the bitstream seamlessly. Like
/// decoding, the call validates everything up front and mutates nothing on failure.
pub fn encode_mono(
    profile: &QuantizerProfile<'_>,
    state: &mut CodecState,
    samples: &[i16],
    encoded: &mut [u8],
    count: usize,
) -> Result<()> {
    if state.channels[0].step_index < 0 || state.channels[0].step_index > MAX_STEP_INDEX {
        return decode_error("adpcm: quantizer index out of range");
    }

    let end = match state.sample_pos.checked_add(count) {
        Some(end) if end <= samples.len() => end,
        _ => return decode_error("adpcm: sample buffer too short for requested count"),
    };

    let needed = required_bits(profile, state.sample_pos, count, 1);

    let mut cursor = state.cursor;
    let mut channel = state.channels[0];

    // The trailing flush pads the pending byte, so capacity rounds up to whole bytes.
    let needed_bytes = (u64::from(cursor.bit_pos) + needed + 7) / 8;
    if needed_bytes > encoded.len().saturating_sub(cursor.byte_pos) as u64 {
        return decode_error("adpcm: encoded buffer too short for requested count");
    }

    let mut writer = BitWriter::new(encoded, &mut cursor);

    for (offset, &sample) in samples[state.sample_pos..end].iter().enumerate() {
        let position = state.sample_pos + offset + 1;

        if position & profile.frame_size_mask == 1 {
            // Frame header: the sample is transmitted whole. The quantizer index is re-seeded
            // for the jump to the next sample of the run; the final sample has no lookahead and
            // keeps the current index.
            channel.predicted = sample;
            writer.write_bits(16, u32::from(channel.predicted as u16))?;

            if offset + 1 != count {
                let next = samples[state.sample_pos + offset + 1];
                channel.step_index = index_for_delta(profile, channel.predicted, next);
            }
            writer.write_bits(6, channel.step_index as u32)?;
        }
        else {
            let delta = channel.compress_delta(sample, profile);
            writer.write_bits(profile.bits_per_sample, delta)?;
        }
    }

    writer.flush()?;

    state.channels[0] = channel;
    state.cursor = cursor;
    state.sample_pos = end;

    Ok(())
}
