//! Tilt event wire frames
//!
//! Fixed 4-byte layout, no escaping or length field:
//!
//! ```text
//! [axis:1][value_hi:1][value_lo:1][0xFF:1]
//! ```
//!
//! axis is 0 (yaw) or 1 (roll); value is the angle as a signed 16-bit
//! big-endian integer; the last byte is a fixed end-of-packet sentinel.

use crate::subsystems::tilt::{TiltAxis, TiltEvent};

/// Frame length in bytes
pub const FRAME_LEN: usize = 4;

/// End-of-packet sentinel
pub const EOP: u8 = 0xFF;

/// Encode a tilt event into its wire frame
pub fn encode(event: TiltEvent) -> [u8; FRAME_LEN] {
    let value = event.value.to_be_bytes();
    [event.axis as u8, value[0], value[1], EOP]
}

/// Decode a wire frame back into a tilt event
///
/// Returns `None` if the axis byte or the sentinel is invalid.
pub fn decode(frame: &[u8; FRAME_LEN]) -> Option<TiltEvent> {
    if frame[3] != EOP {
        return None;
    }
    let axis = match frame[0] {
        0 => TiltAxis::Yaw,
        1 => TiltAxis::Roll,
        _ => return None,
    };
    Some(TiltEvent {
        axis,
        value: i16::from_be_bytes([frame[1], frame[2]]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_positive_yaw() {
        let frame = encode(TiltEvent {
            axis: TiltAxis::Yaw,
            value: 15,
        });
        assert_eq!(frame, [0x00, 0x00, 0x0F, 0xFF]);
    }

    #[test]
    fn test_encode_negative_roll() {
        // two's-complement -20 = 0xFFEC
        let frame = encode(TiltEvent {
            axis: TiltAxis::Roll,
            value: -20,
        });
        assert_eq!(frame, [0x01, 0xFF, 0xEC, 0xFF]);
    }

    #[test]
    fn test_round_trip_all_values() {
        for value in i16::MIN..=i16::MAX {
            let event = TiltEvent {
                axis: TiltAxis::Yaw,
                value,
            };
            assert_eq!(decode(&encode(event)), Some(event));
        }
    }

    #[test]
    fn test_round_trip_roll_axis() {
        for value in [0i16, 1, -1, 10, -10, 180, -180, i16::MAX, i16::MIN] {
            let event = TiltEvent {
                axis: TiltAxis::Roll,
                value,
            };
            assert_eq!(decode(&encode(event)), Some(event));
        }
    }

    #[test]
    fn test_decode_rejects_bad_sentinel() {
        assert_eq!(decode(&[0x00, 0x00, 0x0F, 0x00]), None);
    }

    #[test]
    fn test_decode_rejects_bad_axis() {
        assert_eq!(decode(&[0x02, 0x00, 0x0F, 0xFF]), None);
    }
}
