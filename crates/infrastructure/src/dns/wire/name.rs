//! Domain name encoding and compression-aware decoding (RFC 1035 §3.1, §4.1.4).

use super::WireReader;
use rootwalk_domain::DomainError;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

/// Pointers followed while decoding a single name.
pub const MAX_POINTER_HOPS: usize = 16;

const POINTER_MASK: u8 = 0b1100_0000;

/// Encodes `name` as length-prefixed labels followed by the zero-length root label.
///
/// One trailing dot is accepted. `""` and `"."` encode to the root name.
pub fn encode_name(name: &str) -> Result<Vec<u8>, DomainError> {
    let name = name.strip_suffix('.').unwrap_or(name);
    let mut buf = Vec::with_capacity(name.len() + 2);

    if !name.is_empty() {
        for label in name.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidName(format!(
                    "'{}' contains an empty label",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidName(format!(
                    "label '{}' is {} bytes, limit is {}",
                    label,
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }
    buf.push(0);

    if buf.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidName(format!(
            "'{}' encodes to {} bytes, limit is {}",
            name,
            buf.len(),
            MAX_NAME_LEN
        )));
    }

    Ok(buf)
}

/// Decodes the name at the reader's cursor, following compression pointers.
///
/// On return the cursor sits just past the name as it appears at the starting
/// offset: after the zero byte, or after the 2-byte pointer that ended it.
pub fn decode_name(reader: &mut WireReader<'_>) -> Result<String, DomainError> {
    let mut labels = Vec::new();
    let mut wire_len = 0usize;
    read_labels(reader, &mut labels, &mut wire_len, 0)?;
    Ok(labels.join("."))
}

fn read_labels(
    reader: &mut WireReader<'_>,
    labels: &mut Vec<String>,
    wire_len: &mut usize,
    hops: usize,
) -> Result<(), DomainError> {
    loop {
        let offset = reader.position();
        let length = reader.read_u8()?;

        match length & POINTER_MASK {
            0 if length == 0 => {
                *wire_len += 1;
                return check_name_len(*wire_len);
            }
            0 => {
                let label = reader.read_bytes(length as usize)?;
                *wire_len += 1 + label.len();
                check_name_len(*wire_len)?;
                labels.push(decode_label(label, offset)?);
            }
            POINTER_MASK => {
                let low = reader.read_u8()?;
                let target = (((length & !POINTER_MASK) as usize) << 8) | low as usize;

                if hops >= MAX_POINTER_HOPS {
                    return Err(DomainError::InvalidPointer {
                        offset,
                        reason: "too many chained pointers",
                    });
                }
                if target >= offset {
                    return Err(DomainError::InvalidPointer {
                        offset,
                        reason: "pointer does not point backward",
                    });
                }

                let resume = reader.position();
                reader.seek(target)?;
                let decoded = read_labels(reader, labels, wire_len, hops + 1);
                reader.seek(resume)?;
                // a pointer is always the last label
                return decoded;
            }
            _ => {
                return Err(DomainError::InvalidName(format!(
                    "reserved label type {:#04x} at offset {}",
                    length, offset
                )));
            }
        }
    }
}

/// A label must re-encode to the same bytes: valid UTF-8 with no `.` inside.
fn decode_label(label: &[u8], offset: usize) -> Result<String, DomainError> {
    let text = std::str::from_utf8(label).map_err(|_| {
        DomainError::InvalidName(format!("label at offset {} is not valid UTF-8", offset))
    })?;
    if text.contains('.') {
        return Err(DomainError::InvalidName(format!(
            "label at offset {} contains a '.'",
            offset
        )));
    }
    Ok(text.to_string())
}

fn check_name_len(wire_len: usize) -> Result<(), DomainError> {
    if wire_len > MAX_NAME_LEN {
        return Err(DomainError::InvalidName(format!(
            "decoded name exceeds {} bytes",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}
