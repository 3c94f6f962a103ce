//! # EBCDIC code pages
//!
//! Decode tables for the two code-page variants spoken by the trancode
//! gateways. Each table maps a byte value to a display string: printable
//! characters map to themselves, control bytes map to `<NUL>`-style
//! mnemonics, and a byte without any entry decodes to the variant's
//! unknown marker.

/// One table slot: the display string assigned to a byte value, if any.
pub type Entry = Option<&'static str>;

/// A decode table for one code-page variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePage {
    name: &'static str,
    entries: &'static [Entry; 256],
    unknown: &'static str,
}

impl CodePage {
    /// Decodes a single byte value.
    ///
    /// An assigned byte yields its display string, which may be empty.
    /// Only an unassigned byte yields the unknown marker.
    pub fn decode(&self, byte: u8) -> &'static str {
        self.entries[byte as usize].unwrap_or(self.unknown)
    }

    /// Looks up a two-digit hexadecimal byte, case-insensitive.
    ///
    /// Anything that is not exactly two hex digits decodes to the unknown
    /// marker, same as an unassigned byte.
    pub fn lookup(&self, pair: &str) -> &'static str {
        let mut digits = pair.chars();
        match (digits.next(), digits.next(), digits.next()) {
            (Some(hi), Some(lo), None) => match (hi.to_digit(16), lo.to_digit(16)) {
                (Some(h), Some(l)) => self.decode((h * 16 + l) as u8),
                _ => self.unknown,
            },
            _ => self.unknown,
        }
    }

    /// The raw table slot for a byte value.
    pub fn entry(&self, byte: u8) -> Entry {
        self.entries[byte as usize]
    }

    /// The marker substituted for unassigned bytes.
    pub fn unknown(&self) -> &'static str {
        self.unknown
    }

    /// The variant name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// The request-direction code page.
///
/// Unassigned bytes decode to `"."`, matching what the upstream gateway
/// prints in its own request traces.
pub const REQUEST: CodePage = CodePage {
    name: "request",
    entries: &request::TABLE,
    unknown: ".",
};

/// The response-direction code page.
///
/// A superset of [`REQUEST`]. Unassigned bytes decode to U+FFFD so they
/// stay distinguishable from the period assigned to 0x4B.
pub const RESPONSE: CodePage = CodePage {
    name: "response",
    entries: &response::TABLE,
    unknown: "\u{FFFD}",
};

/// The request-direction decode table
pub mod request {
    use super::Entry;

    /// Shorthand for an unassigned byte
    const __: Entry = None;
    /// Assigned, but displays as nothing
    const NIL: Entry = Some("");

    /// Display strings by byte value
    #[rustfmt::skip]
    pub const TABLE: [Entry; 256] = [
        // 0x00-0x0F
        Some("<NUL>"), Some("<SOH>"), Some("<STX>"), Some("<ETX>"), Some("<SEL>"), Some("<HT>"), Some("<RNL>"), Some("<DEL>"),
        Some("<GE>"), Some("<SPS>"), Some("<RPT>"), Some("<VT>"), Some("<FF>"), Some("\r"), Some("<SO>"), Some("<SI>"),
        // 0x10-0x1F
        Some("<DLE>"), Some("<DC1>"), Some("<DC2>"), Some("<DC3>"), Some("<RES/ENP>"), Some("<NL>"), Some("<BS>"), Some("<POC>"),
        Some("<CAN>"), Some("<EM>"), Some("<UBS>"), Some("<CU1>"), Some("<IFS>"), Some("<IGS>"), Some("<IRS>"), Some("<ITB/IUS>"),
        // 0x20-0x2F
        Some("<DS>"), Some("<SOS>"), Some("<FS>"), Some("<WUS>"), Some("<BYP/INP>"), Some("<LF>"), Some("<ETB>"), Some("<ESC>"),
        Some("<SA>"), Some("<SFE>"), Some("<SM/SW>"), Some("<CSP>"), Some("<MFA>"), Some("<ENQ>"), Some("<ACK>"), Some("<BEL>"),
        // 0x30-0x3F
        NIL, NIL, Some("<SYN>"), Some("<IR>"), Some("<PP>"), Some("<TRN>"), Some("<NBS>"), Some("<EOT>"),
        Some("<SBS>"), Some("<IT>"), Some("<RFF>"), Some("<CU3>"), Some("<DC4>"), Some("<NAK>"), NIL, Some("<SUB>"),
        // 0x40-0x4F
        Some(" "), __, __, __, __, __, __, __,
        __, __, Some("["), Some("."), Some("<"), Some("("), Some("+"), Some("!"),
        // 0x50-0x5F
        Some("&"), __, __, __, __, __, __, __,
        __, __, Some("]"), Some("$"), Some("*"), Some(")"), Some(";"), Some("^"),
        // 0x60-0x6F
        Some("_"), Some("/"), __, __, __, __, __, __,
        __, __, Some("|"), Some(","), Some("%"), Some("_"), Some(">"), Some("?"),
        // 0x70-0x7F
        __, __, __, __, __, __, __, __,
        __, Some("`"), Some(":"), Some("#"), Some("@"), Some("'"), Some("="), Some("\""),
        // 0x80-0x8F
        __, Some("a"), Some("b"), Some("c"), Some("d"), Some("e"), Some("f"), Some("g"),
        Some("h"), Some("i"), __, __, __, __, __, __,
        // 0x90-0x9F
        __, Some("j"), Some("k"), Some("l"), Some("m"), Some("n"), Some("o"), Some("p"),
        Some("q"), Some("r"), __, __, __, __, __, __,
        // 0xA0-0xAF
        __, Some("~"), Some("s"), Some("t"), Some("u"), Some("v"), Some("w"), Some("x"),
        Some("y"), Some("z"), __, __, __, __, __, __,
        // 0xB0-0xBF
        __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __,
        // 0xC0-0xCF
        __, Some("A"), Some("B"), Some("C"), Some("D"), Some("E"), Some("F"), Some("G"),
        Some("H"), Some("I"), __, __, __, __, __, __,
        // 0xD0-0xDF
        __, Some("J"), Some("K"), Some("L"), Some("M"), Some("N"), Some("O"), Some("P"),
        Some("Q"), Some("R"), __, __, __, __, __, __,
        // 0xE0-0xEF
        __, __, Some("S"), Some("T"), Some("U"), Some("V"), Some("W"), Some("X"),
        Some("Y"), Some("Z"), __, __, __, __, __, __,
        // 0xF0-0xFF
        Some("0"), Some("1"), Some("2"), Some("3"), Some("4"), Some("5"), Some("6"), Some("7"),
        Some("8"), Some("9"), __, __, __, __, __, __,
    ];
}

/// The response-direction decode table
pub mod response {
    use super::Entry;

    /// Assigned, but displays as nothing
    const NIL: Entry = Some("");

    /// The entries present here on top of the request table
    #[rustfmt::skip]
    pub const EXTENSIONS: [(u8, Entry); 16] = [
        (0x41, Some("<RSP>")),
        (0x42, NIL), (0x43, NIL), (0x44, NIL), (0x45, NIL),
        (0x46, NIL), (0x47, NIL), (0x48, NIL), (0x49, NIL),
        (0x8B, Some("{")), (0x8F, Some("+")),
        (0x9B, Some("}")),
        (0xAD, Some("[")),
        (0xC0, Some("{")),
        (0xD0, Some("}")),
        (0xE0, Some("\\")),
    ];

    const fn extend(mut table: [Entry; 256]) -> [Entry; 256] {
        let mut i = 0;
        while i < EXTENSIONS.len() {
            table[EXTENSIONS[i].0 as usize] = EXTENSIONS[i].1;
            i += 1;
        }
        table
    }

    /// Display strings by byte value
    pub const TABLE: [Entry; 256] = extend(super::request::TABLE);
}

#[cfg(test)]
mod tests {
    use super::{request, response, REQUEST, RESPONSE};

    #[test]
    fn decodes_letters_and_digits() {
        let zones: [(u8, &str); 7] = [
            (0x81, "abcdefghi"),
            (0x91, "jklmnopqr"),
            (0xA2, "stuvwxyz"),
            (0xC1, "ABCDEFGHI"),
            (0xD1, "JKLMNOPQR"),
            (0xE2, "STUVWXYZ"),
            (0xF0, "0123456789"),
        ];
        for (base, chars) in zones.iter() {
            for (i, c) in chars.chars().enumerate() {
                assert_eq!(REQUEST.decode(base + i as u8), c.to_string());
                assert_eq!(RESPONSE.decode(base + i as u8), c.to_string());
            }
        }
    }

    #[test]
    fn decodes_control_mnemonics() {
        assert_eq!(REQUEST.decode(0x00), "<NUL>");
        assert_eq!(REQUEST.decode(0x0D), "\r");
        assert_eq!(REQUEST.decode(0x15), "<NL>");
        assert_eq!(REQUEST.decode(0x25), "<LF>");
        assert_eq!(REQUEST.decode(0x2F), "<BEL>");
        assert_eq!(REQUEST.decode(0x40), " ");
    }

    #[test]
    fn unassigned_bytes_use_the_marker() {
        assert_eq!(REQUEST.decode(0x41), ".");
        assert_eq!(REQUEST.decode(0xB7), ".");
        assert_eq!(REQUEST.decode(0xFF), ".");
        assert_eq!(RESPONSE.decode(0xB7), "\u{FFFD}");
    }

    #[test]
    fn assigned_empty_is_not_unknown() {
        assert_eq!(REQUEST.decode(0x30), "");
        assert_eq!(REQUEST.decode(0x3E), "");
        assert_eq!(RESPONSE.decode(0x47), "");
        assert!(REQUEST.entry(0x30).is_some());
        assert!(REQUEST.entry(0x41).is_none());
    }

    #[test]
    fn response_is_a_superset_of_request() {
        for byte in 0..=255u8 {
            if let Some(display) = REQUEST.entry(byte) {
                assert_eq!(RESPONSE.entry(byte), Some(display));
            }
        }
        assert_eq!(RESPONSE.decode(0x41), "<RSP>");
        assert_eq!(RESPONSE.decode(0x8B), "{");
        assert_eq!(RESPONSE.decode(0xE0), "\\");
    }

    #[test]
    fn lookup_parses_hex_pairs() {
        assert_eq!(REQUEST.lookup("C1"), "A");
        assert_eq!(REQUEST.lookup("c1"), "A");
        assert_eq!(REQUEST.lookup("f9"), "9");
        assert_eq!(REQUEST.lookup("0D"), "\r");
        assert_eq!(RESPONSE.lookup("e0"), "\\");
    }

    #[test]
    fn lookup_rejects_non_hex() {
        assert_eq!(REQUEST.lookup("G1"), ".");
        assert_eq!(REQUEST.lookup("++"), ".");
        assert_eq!(REQUEST.lookup("4"), ".");
        assert_eq!(REQUEST.lookup("4B2"), ".");
        assert_eq!(RESPONSE.lookup(""), "\u{FFFD}");
    }

    #[test]
    fn assigned_entry_counts() {
        let assigned = request::TABLE.iter().filter(|e| e.is_some()).count();
        assert_eq!(assigned, 156);
        let assigned = response::TABLE.iter().filter(|e| e.is_some()).count();
        assert_eq!(assigned, 172);
    }
}
