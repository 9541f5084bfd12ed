use encoding_rs::WINDOWS_1252;

/// Decode raw file bytes into text. UTF-8 is tried first (with any BOM
/// stripped); bytes that are not valid UTF-8 are decoded as Windows-1252,
/// which is what the older accident-data exports use.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.trim_start_matches('\u{feff}').to_string(),
        Err(_) => {
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}
