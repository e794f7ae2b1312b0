/// Encode bytes as a lowercase, `0x`-prefixed hex string.
///
/// The result is always `2 * bytes.len() + 2` characters long. Lengths are
/// guaranteed by the field types upstream and are not re-checked here.
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}
