/// Bucket key for a record: the uppercase form of its first character.
///
/// Uses the simple one-to-one case mapping, so a record and the same
/// record with its first letter uppercased always share a bucket.
/// Characters without a one-character uppercase ('ß', 'ŉ') key to
/// themselves. Returns `None` for an empty record.
#[inline]
pub fn bucket_key(record: &str) -> Option<char> {
    record.chars().next().map(simple_uppercase)
}

/// Simple uppercase mapping of `c`.
///
/// `char::to_uppercase` applies the full mapping. Where that expands, the
/// simple mapping is either the character itself or, for the Greek letters
/// with ypogegrammeni, the matching prosgegrammeni capital.
pub fn simple_uppercase(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    if let Some(upper) = ypogegrammeni_upper(c) {
        return upper;
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// 'ᾀ'..'ᾇ', 'ᾐ'..'ᾗ', 'ᾠ'..'ᾧ' map eight code points up;
/// 'ᾳ', 'ῃ', 'ῳ' map nine up.
fn ypogegrammeni_upper(c: char) -> Option<char> {
    let offset = match c as u32 {
        0x1F80..=0x1F87 | 0x1F90..=0x1F97 | 0x1FA0..=0x1FA7 => 8,
        0x1FB3 | 0x1FC3 | 0x1FF3 => 9,
        _ => return None,
    };
    char::from_u32(c as u32 + offset)
}
