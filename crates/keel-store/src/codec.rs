//! Binary object framing.
//!
//! An object's framed form is `<type> <decimal-length>\0<payload>`: the
//! type tag, a single space, the payload length in ASCII decimal, a NUL
//! byte, then the payload itself. The content hash is computed over exactly
//! these bytes, so the framing is part of the durable on-disk contract.

use crate::error::{StoreError, StoreResult};
use crate::object::ObjectKind;

/// Encode a payload into its framed form. Pure; no I/O.
pub fn encode(kind: ObjectKind, payload: &[u8]) -> Vec<u8> {
    let length = payload.len().to_string();
    let mut framed =
        Vec::with_capacity(kind.tag_bytes().len() + 1 + length.len() + 1 + payload.len());
    framed.extend_from_slice(kind.tag_bytes());
    framed.push(b' ');
    framed.extend_from_slice(length.as_bytes());
    framed.push(0);
    framed.extend_from_slice(payload);
    framed
}

/// Decode framed bytes back into `(kind, payload)`.
///
/// Fails with [`StoreError::UnknownType`] for an unrecognized tag and
/// [`StoreError::MalformedObject`] for a broken header or a declared length
/// that disagrees with the actual payload length.
pub fn decode(raw: &[u8]) -> StoreResult<(ObjectKind, &[u8])> {
    let space = raw
        .iter()
        .position(|&b| b == b' ')
        .ok_or_else(|| StoreError::MalformedObject("missing space after type tag".into()))?;
    let tag = &raw[..space];
    let kind = ObjectKind::from_tag(tag)
        .ok_or_else(|| StoreError::UnknownType(String::from_utf8_lossy(tag).into_owned()))?;

    let nul = raw[space..]
        .iter()
        .position(|&b| b == 0)
        .map(|offset| space + offset)
        .ok_or_else(|| StoreError::MalformedObject("missing NUL after length field".into()))?;
    let length: usize = std::str::from_utf8(&raw[space + 1..nul])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| StoreError::MalformedObject("length field is not decimal".into()))?;

    let payload = &raw[nul + 1..];
    if length != payload.len() {
        return Err(StoreError::MalformedObject(format!(
            "bad length: header says {length}, payload is {}",
            payload.len()
        )));
    }
    Ok((kind, payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_frames_the_payload() {
        assert_eq!(encode(ObjectKind::Blob, b"hello"), b"blob 5\0hello");
        assert_eq!(encode(ObjectKind::Commit, b""), b"commit 0\0");
    }

    #[test]
    fn decode_inverts_encode() {
        for kind in [
            ObjectKind::Blob,
            ObjectKind::Tree,
            ObjectKind::Commit,
            ObjectKind::Tag,
        ] {
            for payload in [&b""[..], b"x", b"hello world", &[0u8, 255, 0, 7]] {
                let framed = encode(kind, payload);
                let (decoded_kind, decoded_payload) = decode(&framed).unwrap();
                assert_eq!(decoded_kind, kind);
                assert_eq!(decoded_payload, payload);
            }
        }
    }

    #[test]
    fn payload_may_contain_nul_and_space() {
        let payload = b"a b\0c d\0";
        let framed = encode(ObjectKind::Blob, payload);
        let (_, decoded) = decode(&framed).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn decode_rejects_unknown_tag() {
        let err = decode(b"bolb 5\0hello").unwrap_err();
        assert!(matches!(err, StoreError::UnknownType(tag) if tag == "bolb"));
    }

    #[test]
    fn decode_rejects_missing_space() {
        let err = decode(b"blob").unwrap_err();
        assert!(matches!(err, StoreError::MalformedObject(_)));
    }

    #[test]
    fn decode_rejects_missing_nul() {
        let err = decode(b"blob 5hello").unwrap_err();
        assert!(matches!(err, StoreError::MalformedObject(_)));
    }

    #[test]
    fn decode_rejects_non_decimal_length() {
        let err = decode(b"blob five\0hello").unwrap_err();
        assert!(matches!(err, StoreError::MalformedObject(_)));
    }

    #[test]
    fn decode_rejects_length_mismatch() {
        let err = decode(b"blob 4\0hello").unwrap_err();
        assert!(matches!(err, StoreError::MalformedObject(_)));
        let err = decode(b"blob 6\0hello").unwrap_err();
        assert!(matches!(err, StoreError::MalformedObject(_)));
    }

    #[test]
    fn decode_rejects_empty_input() {
        assert!(decode(b"").is_err());
    }
}
