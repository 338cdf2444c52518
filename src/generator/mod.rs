//generator/mod.rs
use std::io::{self, Write};

use crate::{RecordTable, SectionRecord};

pub fn write_banner<W: Write>(writer: &mut W, report: &str) -> io::Result<()> {
    writeln!(writer, "=== summary from {}", report)
}

pub fn write_sections<W: Write>(writer: &mut W, sections: &RecordTable) -> io::Result<()> {
    for (name, record) in sections {
        writeln!(writer, "{}", format_section(name, record))?;
    }
    Ok(())
}

/// One aligned summary row: name, gate equivalents, transistors, logic depth.
pub fn format_section(name: &str, record: &SectionRecord) -> String {
    format!(
        "{:<20}  ge={:>7}  tr={:>5}  ltp={:>3}",
        name,
        format_gate_equivalent(record.gate_equivalent),
        record.transistors,
        record.depth
    )
}

// Shortest round-trip form with a fractional part (16.0, 10.25); outside
// [1e-4, 1e16) an exponent with sign and at least two digits (1e+16, 5e-06)
fn format_gate_equivalent(ge: f64) -> String {
    let shortest = format!("{:?}", ge);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(gate_equivalent: f64, transistors: i64, depth: i64) -> SectionRecord {
        SectionRecord { gate_equivalent, transistors, depth }
    }

    #[test]
    fn section_row_alignment() {
        assert_eq!(
            format_section("mod1", &record(16.0, 120, 12)),
            format!("mod1{}  ge=   16.0  tr=  120  ltp= 12", " ".repeat(16))
        );
        assert_eq!(
            format_section("aes_sbox", &record(10.25, 0, 0)),
            format!("aes_sbox{}  ge=  10.25  tr=    0  ltp=  0", " ".repeat(12))
        );
    }

    #[test]
    fn long_names_and_numbers_widen_the_row() {
        assert_eq!(
            format_section("a_very_long_module_name_x", &record(1234567.5, 1234567, 1234)),
            "a_very_long_module_name_x  ge=1234567.5  tr=1234567  ltp=1234"
        );
    }

    #[test]
    fn gate_equivalent_exponents() {
        assert_eq!(format_gate_equivalent(16.0), "16.0");
        assert_eq!(format_gate_equivalent(0.0001), "0.0001");
        assert_eq!(format_gate_equivalent(1e16), "1e+16");
        assert_eq!(format_gate_equivalent(1.5e20), "1.5e+20");
        assert_eq!(format_gate_equivalent(5e-6), "5e-06");
        assert_eq!(format_gate_equivalent(2.5e-123), "2.5e-123");
    }

    #[test]
    fn negative_fields_keep_alignment() {
        assert_eq!(
            format_section("m", &record(0.0, -5, -2)),
            format!("m{}  ge=    0.0  tr=   -5  ltp= -2", " ".repeat(19))
        );
    }

    #[test]
    fn sections_listed_in_table_order() {
        let mut sections = RecordTable::new();
        sections.insert("b".to_string(), record(1.0, 2, 3));
        sections.insert("a".to_string(), record(0.5, 0, 0));

        let mut out = Vec::new();
        write_banner(&mut out, "r.log").unwrap();
        write_sections(&mut out, &sections).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=== summary from r.log");
        assert!(lines[1].starts_with("b "));
        assert!(lines[1].ends_with("ge=    1.0  tr=    2  ltp=  3"));
        assert!(lines[2].starts_with("a "));
    }

    #[test]
    fn empty_table_prints_only_banner() {
        let mut out = Vec::new();
        write_sections(&mut out, &RecordTable::new()).unwrap();
        assert!(out.is_empty());
        write_banner(&mut out, "empty.log").unwrap();
        assert_eq!(out, b"=== summary from empty.log\n");
    }
}
